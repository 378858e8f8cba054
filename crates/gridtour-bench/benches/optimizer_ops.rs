//! Criterion benchmarks for the checkpoint order optimizer and full solves.

use criterion::{criterion_group, criterion_main, Criterion};
use gridtour_bench::{reference_profile, stress_profile};
use gridtour_plan::{solve, Planner, PlannerConfig};
use gridtour_test_utils::scenario_4x4;
use std::hint::black_box;

/// Benchmark: the 4x4 reference scenario, end to end.
fn bench_solve_scenario_4x4(c: &mut Criterion) {
    let spec = scenario_4x4();

    c.bench_function("solve_scenario_4x4", |b| {
        b.iter(|| black_box(solve(&spec)));
    });
}

/// Benchmark: reference profile (720 orderings) with and without the leg cache.
fn bench_solve_reference(c: &mut Criterion) {
    let spec = reference_profile(42);
    let cached = Planner::new();
    let uncached = Planner::with_config(PlannerConfig { cache_legs: false });

    let mut group = c.benchmark_group("solve_reference");
    group.bench_function("cached", |b| {
        b.iter(|| black_box(cached.solve(&spec)));
    });
    group.bench_function("uncached", |b| {
        b.iter(|| black_box(uncached.solve(&spec)));
    });
    group.finish();
}

/// Benchmark: stress profile (40320 orderings), cached only.
fn bench_solve_stress(c: &mut Criterion) {
    let spec = stress_profile(7);

    let mut group = c.benchmark_group("solve_stress");
    group.sample_size(10);
    group.bench_function("cached", |b| {
        b.iter(|| black_box(solve(&spec)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_solve_scenario_4x4,
    bench_solve_reference,
    bench_solve_stress
);
criterion_main!(benches);
