use bracket_core::{
    Bracket, BracketBuilder, MatchOutcomeModel, ProbabilityAggregator, SeedScorer, SimConfig,
    TeamStats, TournamentSimulator,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn field_stats() -> Vec<TeamStats> {
    (0..68)
        .map(|i| TeamStats {
            name: format!("Team{:02}", i + 1),
            win_pct: 0.95 - 0.008 * i as f64,
            net_rank: i as u32 + 1,
            rpi_rank: i as u32 + 1,
            sos: 0.85 - 0.007 * i as f64,
        })
        .collect()
}

fn build_bracket() -> Bracket {
    let teams = SeedScorer::default().score_field(&field_stats()).unwrap();
    BracketBuilder.build(teams).unwrap()
}

fn bench_win_probability(c: &mut Criterion) {
    let bracket = build_bracket();
    let model = MatchOutcomeModel::default();
    let a = bracket.team(0);
    let b = bracket.team(63);

    c.bench_function("win_probability", |bench| {
        bench.iter(|| model.win_probability(black_box(a), black_box(b)))
    });
}

fn bench_build_bracket(c: &mut Criterion) {
    let teams = SeedScorer::default().score_field(&field_stats()).unwrap();

    c.bench_function("build_bracket", |bench| {
        bench.iter(|| BracketBuilder.build(black_box(teams.clone())).unwrap())
    });
}

fn bench_simulate_one(c: &mut Criterion) {
    let bracket = build_bracket();
    let sim = TournamentSimulator::new(&bracket, MatchOutcomeModel::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("simulate_one", |bench| {
        bench.iter(|| black_box(sim.simulate_one(&mut rng)))
    });
}

fn bench_aggregate_1000_trials(c: &mut Criterion) {
    let bracket = build_bracket();
    let config = SimConfig {
        trials: 1000,
        random_seed: Some(42),
        ..SimConfig::default()
    };
    let aggregator = ProbabilityAggregator::default();

    c.bench_function("aggregate_1000_trials", |bench| {
        bench.iter(|| aggregator.run(black_box(&bracket), black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_win_probability,
    bench_build_bracket,
    bench_simulate_one,
    bench_aggregate_1000_trials
);
criterion_main!(benches);
