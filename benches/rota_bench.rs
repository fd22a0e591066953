//! Criterion benchmarks for the rota optimizer.
//!
//! Covers the three hot paths: greedy construction, energy evaluation, and a
//! compressed annealing run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rotaplan::anneal::{schedule_energy, AnnealConfig, AnnealRunner};
use rotaplan::greedy::GreedyBuilder;
use rotaplan::model::RoomPlan;

fn bench_greedy_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_build");

    for &(population, rooms, sessions) in &[(13, 6, 6), (40, 8, 10), (100, 10, 12)] {
        let plan = RoomPlan::uniform(population, rooms).unwrap();
        group.bench_with_input(
            BenchmarkId::new(format!("n{population}_r{rooms}_t{sessions}"), population),
            &plan,
            |b, plan| {
                b.iter(|| {
                    let mut builder = GreedyBuilder::new(black_box(plan));
                    let mut rng = StdRng::seed_from_u64(42);
                    black_box(builder.build(sessions, &mut rng).unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_energy");

    for &(population, rooms, sessions) in &[(13, 6, 6), (100, 10, 12)] {
        let plan = RoomPlan::uniform(population, rooms).unwrap();
        let mut builder = GreedyBuilder::new(&plan);
        let mut rng = StdRng::seed_from_u64(42);
        let schedule = builder.build(sessions, &mut rng).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &(schedule, plan),
            |b, (schedule, plan)| {
                b.iter(|| black_box(schedule_energy(black_box(schedule), black_box(plan))))
            },
        );
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    let plan = RoomPlan::uniform(13, 6).unwrap();
    let mut builder = GreedyBuilder::new(&plan);
    let mut rng = StdRng::seed_from_u64(42);
    let schedule = builder.build(6, &mut rng).unwrap();

    // Compressed cool: ~700 iterations instead of the million-step default.
    let config = AnnealConfig::default()
        .with_initial_temperature(1_000.0)
        .with_cooling_rate(0.01)
        .with_seed(42);

    group.bench_function("n13_r6_t6_short", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            let result = AnnealRunner::run(
                black_box(schedule.clone()),
                black_box(&plan),
                black_box(&config),
                &mut rng,
            );
            black_box(result.unwrap())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_greedy_build, bench_energy, bench_anneal);
criterion_main!(benches);
