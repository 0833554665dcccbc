use thiserror::Error;

/// Errors surfaced by seeding, bracket construction, and simulation.
///
/// All variants are validation failures on static input; none are
/// retryable.
#[derive(Debug, Error)]
pub enum BracketError {
    /// A team's raw stat record is missing a sane value.
    #[error("invalid stat for {team}: {reason}")]
    InvalidStat { team: String, reason: String },

    /// Fewer valid teams than the tournament field requires.
    #[error("bracket needs at least {required} teams, got {actual}")]
    InsufficientTeams { required: usize, actual: usize },

    /// Simulation configuration rejected before any trial runs.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Structural invariant violation inside a bracket. Indicates a
    /// programming defect, never expected in correct operation.
    #[error("bracket structure violation: {0}")]
    BracketStructure(String),
}
