//! Benchmarks for the per-frame passes.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driftfield::prelude::*;

fn bench_field(count: usize) -> ParticleField {
    let mut field = ParticleField::builder()
        .with_count(count)
        .with_seed(1)
        .with_link_distance(150.0)
        .build(800.0, 600.0)
        .unwrap();
    field.pointer_moved(Vec2::new(400.0, 300.0));
    field
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    // Both pairwise passes are O(n^2); the interesting range is the
    // intended operating point and a bit beyond it.
    for count in [50usize, 100, 200, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut field = bench_field(count);
            b.iter(|| field.step(black_box(1.0)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for count in [50usize, 100, 200, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let field = bench_field(count);
            let mut sink = RecordingSink::new();
            b.iter(|| field.render(black_box(&mut sink)));
        });
    }
    group.finish();
}

fn bench_burst(c: &mut Criterion) {
    c.bench_function("burst_with_eviction", |b| {
        let mut field = ParticleField::builder()
            .with_count(80)
            .with_seed(1)
            .with_burst(BurstConfig::default())
            .build(800.0, 600.0)
            .unwrap();
        b.iter(|| field.add_burst(black_box(Vec2::new(400.0, 300.0)), 4));
    });
}

criterion_group!(benches, bench_step, bench_render, bench_burst);
criterion_main!(benches);
