use crate::constants::{
    DEFAULT_RANK_FIELD, NET_RANK_WEIGHT, RPI_RANK_WEIGHT, SOS_WEIGHT, WIN_PCT_WEIGHT,
};
use crate::error::BracketError;
use crate::team::{Team, TeamStats};

/// Converts a team's raw stats into a single composite seed score.
///
/// `seed_score = win_pct*40 + invert(net)*30 + invert(rpi)*20 + sos*10`
/// where every component is normalized to an ascending-is-better [0, 1]
/// scale before weighting. Rank-based fields are inverted as
/// `(field - rank + 1) / field` so that rank 1 contributes the maximum;
/// multiplying the raw rank number would reward worse teams.
#[derive(Clone, Copy, Debug)]
pub struct SeedScorer {
    /// Number of ranked teams, used to normalize NET/RPI ranks.
    field_size: usize,
}

impl Default for SeedScorer {
    fn default() -> Self {
        SeedScorer::new(DEFAULT_RANK_FIELD)
    }
}

impl SeedScorer {
    pub fn new(field_size: usize) -> Self {
        SeedScorer { field_size }
    }

    /// Compute the composite score for one team.
    ///
    /// Pure function of the input; fails with
    /// [`BracketError::InvalidStat`] when any field is non-finite or out
    /// of its sane domain.
    pub fn score(&self, stats: &TeamStats) -> Result<f64, BracketError> {
        self.validate(stats)?;

        let net = self.invert_rank(stats.net_rank);
        let rpi = self.invert_rank(stats.rpi_rank);

        Ok(stats.win_pct * WIN_PCT_WEIGHT
            + net * NET_RANK_WEIGHT
            + rpi * RPI_RANK_WEIGHT
            + stats.sos * SOS_WEIGHT)
    }

    /// Score a whole field of stat records, preserving input order.
    pub fn score_field(&self, field: &[TeamStats]) -> Result<Vec<Team>, BracketError> {
        field
            .iter()
            .map(|stats| Ok(Team::new(stats, self.score(stats)?)))
            .collect()
    }

    /// Map a 1-is-best rank onto an ascending-is-better [0, 1] scale.
    fn invert_rank(&self, rank: u32) -> f64 {
        let field = self.field_size as f64;
        (field - rank as f64 + 1.0) / field
    }

    fn validate(&self, stats: &TeamStats) -> Result<(), BracketError> {
        let fail = |reason: String| BracketError::InvalidStat {
            team: stats.name.clone(),
            reason,
        };

        if !stats.win_pct.is_finite() || !(0.0..=1.0).contains(&stats.win_pct) {
            return Err(fail(format!("win_pct {} outside [0, 1]", stats.win_pct)));
        }
        for (label, rank) in [("net_rank", stats.net_rank), ("rpi_rank", stats.rpi_rank)] {
            if rank < 1 || rank as usize > self.field_size {
                return Err(fail(format!(
                    "{label} {rank} outside [1, {}]",
                    self.field_size
                )));
            }
        }
        if !stats.sos.is_finite() || !(0.0..=1.0).contains(&stats.sos) {
            return Err(fail(format!("sos {} outside [0, 1]", stats.sos)));
        }
        Ok(())
    }
}
