//! Criterion micro-benchmarks for single walks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use patrol_bench::{reference_profile, sparse_profile};
use patrol_sim::{run_to_exit, run_with_cycle_detection, Trajectory};

/// Benchmark: run-to-exit on the 130x130 reference map.
fn bench_run_to_exit_reference(c: &mut Criterion) {
    let s = reference_profile(42);
    c.bench_function("run_to_exit_reference", |b| {
        b.iter(|| black_box(run_to_exit(&s.grid, s.start).unwrap().len()));
    });
}

/// Benchmark: cycle-detecting run on the same map (bitmap state set).
fn bench_cycle_detection_reference(c: &mut Criterion) {
    let s = reference_profile(42);
    c.bench_function("cycle_detection_reference", |b| {
        b.iter(|| black_box(run_with_cycle_detection(&s.grid, s.start).unwrap()));
    });
}

/// Benchmark: iterate a full trajectory on the sparse map.
fn bench_trajectory_sparse(c: &mut Criterion) {
    let s = sparse_profile(42);
    c.bench_function("trajectory_sparse", |b| {
        b.iter(|| {
            let t = Trajectory::new(&s.grid, s.start).unwrap();
            black_box(t.count())
        });
    });
}

criterion_group!(
    benches,
    bench_run_to_exit_reference,
    bench_cycle_detection_reference,
    bench_trajectory_sparse
);
criterion_main!(benches);
