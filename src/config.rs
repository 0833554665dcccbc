use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TEAM_LIMIT, DEFAULT_TRIALS, FIELD_TEAMS};
use crate::error::BracketError;

/// Simulation configuration consumed by the aggregator.
///
/// Deserializes with per-field defaults so a partial TOML/JSON table from
/// the caller is enough.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of Monte Carlo trials to run.
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Master seed for reproducible runs. `None` seeds from entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Cap on ingested stat records; must cover the 68-team field.
    #[serde(default = "default_team_limit")]
    pub team_limit: usize,
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}

fn default_team_limit() -> usize {
    DEFAULT_TEAM_LIMIT
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            trials: DEFAULT_TRIALS,
            random_seed: None,
            team_limit: DEFAULT_TEAM_LIMIT,
        }
    }
}

impl SimConfig {
    /// Reject configurations that cannot produce a valid run.
    pub fn validate(&self) -> Result<(), BracketError> {
        if self.trials < 1 {
            return Err(BracketError::InvalidConfiguration(format!(
                "trials must be at least 1, got {}",
                self.trials
            )));
        }
        if self.team_limit < FIELD_TEAMS {
            return Err(BracketError::InvalidConfiguration(format!(
                "team_limit must be at least {FIELD_TEAMS}, got {}",
                self.team_limit
            )));
        }
        Ok(())
    }
}
