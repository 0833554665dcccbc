use statrs::distribution::{ContinuousCDF, Normal};

use crate::constants::DEFAULT_SCORE_SPREAD;
use crate::team::Team;

/// Floor keeping win probabilities strictly inside (0, 1) even for
/// extreme score gaps, so aggregated round frequencies stay stochastic
/// rather than deterministic.
const PROB_FLOOR: f64 = 1e-9;

/// Pairwise outcome model: win probability from the composite-score gap.
///
/// The score difference is treated as an expected margin and pushed
/// through the standard normal CDF, with `spread` points of score gap
/// per standard deviation of outcome.
#[derive(Clone, Copy, Debug)]
pub struct MatchOutcomeModel {
    /// Score gap treated as one standard deviation. Smaller values make
    /// favorites heavier; larger values flatten every matchup toward a
    /// coin flip.
    spread: f64,
}

impl Default for MatchOutcomeModel {
    fn default() -> Self {
        MatchOutcomeModel::new(DEFAULT_SCORE_SPREAD)
    }
}

impl MatchOutcomeModel {
    pub fn new(spread: f64) -> Self {
        debug_assert!(spread > 0.0);
        MatchOutcomeModel { spread }
    }

    /// Probability that `a` beats `b`, strictly inside (0, 1).
    ///
    /// Antisymmetric: `win_probability(a, b) + win_probability(b, a)`
    /// is 1 within floating tolerance.
    pub fn win_probability(&self, a: &Team, b: &Team) -> f64 {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let z = (a.seed_score - b.seed_score) / self.spread;
        normal.cdf(z).clamp(PROB_FLOOR, 1.0 - PROB_FLOOR)
    }
}
