//! Bracket Core - tournament field seeding and Monte Carlo projection.
//!
//! Turns raw per-team stat records into a seeded 68-team bracket and
//! estimates, by repeated probabilistic simulation, each team's chance
//! of reaching and winning every round. The crate performs no I/O;
//! stats retrieval and result export belong to the calling layer.
//!
//! Pipeline: [`SeedScorer`] ranks the field, [`BracketBuilder`] snakes
//! it into four balanced regions plus First Four play-in games,
//! [`TournamentSimulator`] plays the bracket out one trial at a time
//! with [`MatchOutcomeModel`], and [`ProbabilityAggregator`] tallies
//! many trials into per-team round probabilities.

pub mod aggregate;
pub mod bracket;
pub mod config;
pub mod constants;
pub mod error;
pub mod scoring;
pub mod simulate;
pub mod team;
pub mod win_prob;

pub use aggregate::{ProbabilityAggregator, RoundProbabilities, TeamProjection};
pub use bracket::{Bracket, BracketBuilder, PlayInSlot, Region, TeamId, REGIONS};
pub use config::SimConfig;
pub use constants::{DEFAULT_SCORE_SPREAD, DEFAULT_TRIALS, FIELD_TEAMS, SEED_ORDER};
pub use error::BracketError;
pub use scoring::SeedScorer;
pub use simulate::{Round, TournamentSimulator, TrialResult};
pub use team::{Team, TeamStats};
pub use win_prob::MatchOutcomeModel;
