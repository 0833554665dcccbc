use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::bracket::{Bracket, Region, TeamId, REGIONS};
use crate::config::SimConfig;
use crate::error::BracketError;
use crate::simulate::{Round, TournamentSimulator, TrialResult};
use crate::win_prob::MatchOutcomeModel;

/// Count buckets per team. The first seven track games won per round
/// (the Championship round's winner is the champion); the extra bucket
/// tracks championship-game appearances.
const BUCKETS: usize = Round::COUNT + 1;
const APPEARANCE_BUCKET: usize = Round::COUNT;

/// Per-team tallies across trials. Zeroed before the first trial,
/// incremented after each, and read as probabilities only once every
/// trial has finished.
#[derive(Clone, Debug)]
struct AggregateCounts {
    counts: Vec<[u64; BUCKETS]>,
}

impl AggregateCounts {
    fn new(team_count: usize) -> Self {
        AggregateCounts {
            counts: vec![[0; BUCKETS]; team_count],
        }
    }

    fn record(&mut self, trial: &TrialResult) {
        for round in 0..Round::COUNT {
            for &winner in &trial.winners[round] {
                self.counts[winner][round] += 1;
            }
        }
        let (a, b) = trial.finalists;
        self.counts[a][APPEARANCE_BUCKET] += 1;
        self.counts[b][APPEARANCE_BUCKET] += 1;
    }

    /// Merge a worker's partial tallies. Plain addition, so merge order
    /// never affects the totals.
    fn merge(&mut self, other: AggregateCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            for (m, t) in mine.iter_mut().zip(theirs) {
                *m += t;
            }
        }
    }

    fn probabilities(&self, id: TeamId, trials: usize) -> RoundProbabilities {
        let c = &self.counts[id];
        let f = |bucket: usize| c[bucket] as f64 / trials as f64;
        RoundProbabilities {
            prob_first_four: f(Round::FirstFour.index()),
            prob_r64: f(Round::RoundOf64.index()),
            prob_r32: f(Round::RoundOf32.index()),
            prob_s16: f(Round::SweetSixteen.index()),
            prob_e8: f(Round::EliteEight.index()),
            prob_f4: f(Round::FinalFour.index()),
            prob_championship: f(APPEARANCE_BUCKET),
            prob_champion: f(Round::Championship.index()),
        }
    }
}

/// Estimated round-by-round outcome frequencies for one team.
///
/// `prob_first_four` through `prob_f4` are the chances of winning the
/// team's game at that round; `prob_championship` is the chance of
/// appearing in the title game and `prob_champion` of winning it. From
/// `prob_r64` on, the sequence is weakly decreasing for every team.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoundProbabilities {
    pub prob_first_four: f64,
    pub prob_r64: f64,
    pub prob_r32: f64,
    pub prob_s16: f64,
    pub prob_e8: f64,
    pub prob_f4: f64,
    pub prob_championship: f64,
    pub prob_champion: f64,
}

/// One output record for the export collaborator: a team's bracket
/// placement plus its estimated probabilities.
#[derive(Clone, Debug, Serialize)]
pub struct TeamProjection {
    pub name: String,
    pub region: Region,
    pub seed: u8,

    /// True for the four play-in challengers contesting a 16 line.
    pub first_four: bool,

    #[serde(flatten)]
    pub probs: RoundProbabilities,
}

/// Runs many independent trials and converts tallies into probability
/// estimates.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProbabilityAggregator {
    model: MatchOutcomeModel,
}

impl ProbabilityAggregator {
    pub fn new(model: MatchOutcomeModel) -> Self {
        ProbabilityAggregator { model }
    }

    /// Run `config.trials` bracket playouts and estimate every team's
    /// round-by-round probabilities.
    ///
    /// One seed per trial is drawn up front from a master generator, so
    /// a fixed `random_seed` reproduces the output bit for bit no
    /// matter how rayon schedules the trials: per-trial streams are
    /// independent and the partial tallies merge by addition.
    pub fn run(
        &self,
        bracket: &Bracket,
        config: &SimConfig,
    ) -> Result<Vec<TeamProjection>, BracketError> {
        config.validate()?;
        let simulator = TournamentSimulator::new(bracket, self.model)?;

        let mut master = match config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let trial_seeds: Vec<u64> = (0..config.trials).map(|_| master.gen()).collect();

        info!(
            "running {} bracket trials (seed: {:?})",
            config.trials, config.random_seed
        );

        let team_count = bracket.teams().len();
        let counts = trial_seeds
            .par_iter()
            .fold(
                || AggregateCounts::new(team_count),
                |mut acc, &seed| {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    acc.record(&simulator.simulate_one(&mut rng));
                    acc
                },
            )
            .reduce(
                || AggregateCounts::new(team_count),
                |mut a, b| {
                    a.merge(b);
                    a
                },
            );

        debug!("trials complete, tallying {} teams", team_count);
        Ok(self.project(bracket, &counts, config.trials))
    }

    /// Convert final tallies into export records ordered by (region,
    /// seed), each play-in challenger following its region's block.
    fn project(
        &self,
        bracket: &Bracket,
        counts: &AggregateCounts,
        trials: usize,
    ) -> Vec<TeamProjection> {
        let mut out = Vec::with_capacity(bracket.teams().len());
        for region in REGIONS {
            for seed in 1..=16u8 {
                let id = bracket.seed_line(region, seed);
                out.push(TeamProjection {
                    name: bracket.team(id).name.clone(),
                    region,
                    seed,
                    first_four: false,
                    probs: counts.probabilities(id, trials),
                });
            }
            if let Some(slot) = bracket.play_in().iter().find(|s| s.region == region) {
                out.push(TeamProjection {
                    name: bracket.team(slot.challenger).name.clone(),
                    region,
                    seed: 16,
                    first_four: true,
                    probs: counts.probabilities(slot.challenger, trials),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{synthetic_field, BracketBuilder};

    fn run(trials: usize, seed: u64) -> Vec<TeamProjection> {
        let bracket = BracketBuilder.build(synthetic_field(68)).unwrap();
        let config = SimConfig {
            trials,
            random_seed: Some(seed),
            ..SimConfig::default()
        };
        ProbabilityAggregator::default().run(&bracket, &config).unwrap()
    }

    fn round_sequence(p: &RoundProbabilities) -> [f64; 7] {
        [
            p.prob_r64,
            p.prob_r32,
            p.prob_s16,
            p.prob_e8,
            p.prob_f4,
            p.prob_championship,
            p.prob_champion,
        ]
    }

    #[test]
    fn test_output_covers_full_field() {
        let projections = run(50, 1);
        assert_eq!(projections.len(), 68);
        assert_eq!(projections.iter().filter(|p| p.first_four).count(), 4);
    }

    #[test]
    fn test_round_monotonicity() {
        for projection in run(400, 2) {
            let seq = round_sequence(&projection.probs);
            for pair in seq.windows(2) {
                assert!(
                    pair[1] <= pair[0],
                    "{} round probabilities increased: {seq:?}",
                    projection.name
                );
            }
        }
    }

    #[test]
    fn test_champion_mass_conserved() {
        let total: f64 = run(300, 3).iter().map(|p| p.probs.prob_champion).sum();
        assert!((total - 1.0).abs() < 1e-9, "champion mass {total}");
    }

    #[test]
    fn test_probabilities_in_unit_interval() {
        for projection in run(200, 4) {
            let p = projection.probs;
            for value in [
                p.prob_first_four,
                p.prob_r64,
                p.prob_r32,
                p.prob_s16,
                p.prob_e8,
                p.prob_f4,
                p.prob_championship,
                p.prob_champion,
            ] {
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_reproducible_bit_identical() {
        let first = run(250, 99);
        let second = run(250, 99);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.probs, b.probs);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = run(250, 1);
        let second = run(250, 2);
        let same = first
            .iter()
            .zip(&second)
            .all(|(a, b)| a.probs == b.probs);
        assert!(!same, "distinct seeds should sample distinct outcomes");
    }

    #[test]
    fn test_zero_trials_rejected() {
        let bracket = BracketBuilder.build(synthetic_field(68)).unwrap();
        let config = SimConfig {
            trials: 0,
            random_seed: Some(1),
            ..SimConfig::default()
        };
        let err = ProbabilityAggregator::default()
            .run(&bracket, &config)
            .unwrap_err();
        assert!(matches!(err, BracketError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_non_play_in_teams_never_counted_in_first_four() {
        for projection in run(100, 5) {
            if projection.seed < 16 {
                assert_eq!(projection.probs.prob_first_four, 0.0, "{}", projection.name);
            }
        }
    }
}
