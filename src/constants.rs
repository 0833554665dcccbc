/// Weight of normalized win percentage in the composite seed score.
pub const WIN_PCT_WEIGHT: f64 = 40.0;

/// Weight of the inverted NET rank in the composite seed score.
pub const NET_RANK_WEIGHT: f64 = 30.0;

/// Weight of the inverted RPI rank in the composite seed score.
pub const RPI_RANK_WEIGHT: f64 = 20.0;

/// Weight of strength of schedule in the composite seed score.
pub const SOS_WEIGHT: f64 = 10.0;

/// Default number of ranked teams used to normalize NET/RPI ranks.
pub const DEFAULT_RANK_FIELD: usize = 200;

/// Number of bracket regions.
pub const REGION_COUNT: usize = 4;

/// Seed lines per region.
pub const SEEDS_PER_REGION: usize = 16;

/// Main-bracket size (4 regions x 16 seeds).
pub const BRACKET_TEAMS: usize = REGION_COUNT * SEEDS_PER_REGION;

/// Play-in (First Four) games, one feeding each region's 16 line.
pub const PLAY_IN_GAMES: usize = 4;

/// Full tournament field, main bracket plus play-in challengers.
pub const FIELD_TEAMS: usize = BRACKET_TEAMS + PLAY_IN_GAMES;

/// Seed order down one region's side of the bracket, arranged so that
/// round-of-64 winners meet on the correct round-of-32 lines (the 1/16
/// winner plays the 8/9 winner, and so on).
pub const SEED_ORDER: [u8; SEEDS_PER_REGION] =
    [1, 16, 8, 9, 5, 12, 4, 13, 6, 11, 3, 14, 7, 10, 2, 15];

/// Composite-score gap treated as one standard deviation of game outcome.
///
/// Scores live on a 0-100 scale, so the 25-35 point gap between a typical
/// 1 seed and 16 seed lands the favorite around a 0.97-0.99 win probability
/// rather than a certainty.
pub const DEFAULT_SCORE_SPREAD: f64 = 12.0;

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: usize = 1000;

/// Default cap on ingested stat records. Must cover the 68-team field.
pub const DEFAULT_TEAM_LIMIT: usize = 75;
