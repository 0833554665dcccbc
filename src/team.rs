use serde::{Deserialize, Serialize};

/// Raw per-team stat record as delivered by the stats collaborator.
///
/// Ranks follow the convention that 1 is the best team; `win_pct` and
/// `sos` are 0-1 scales. Validation happens once, in [`SeedScorer`],
/// not scattered through downstream logic.
///
/// [`SeedScorer`]: crate::scoring::SeedScorer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamStats {
    pub name: String,

    /// Fraction of games won, in [0, 1].
    pub win_pct: f64,

    /// NET ranking, 1 = best.
    pub net_rank: u32,

    /// RPI ranking, 1 = best.
    pub rpi_rank: u32,

    /// Strength of schedule, 0-1 scale, higher = tougher opponents.
    pub sos: f64,
}

/// A team with its validated stats and derived composite seed score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub win_pct: f64,
    pub net_rank: u32,
    pub rpi_rank: u32,
    pub sos: f64,

    /// Composite strength estimate on a 0-100 scale, higher = better.
    pub seed_score: f64,
}

impl Team {
    pub fn new(stats: &TeamStats, seed_score: f64) -> Self {
        Team {
            name: stats.name.clone(),
            win_pct: stats.win_pct,
            net_rank: stats.net_rank,
            rpi_rank: stats.rpi_rank,
            sos: stats.sos,
            seed_score,
        }
    }
}
