//! Criterion benchmarks for polygon area accumulation and projection.
//! Focus sizes: ring vertex counts in {3, 10, 100, 1000}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geocalc::prelude::*;

/// Ring of `n` vertices on a 1-degree circle around a mid-latitude center.
fn ring(n: usize) -> Vec<GeoPoint> {
    (0..n)
        .map(|j| {
            let theta = std::f64::consts::TAU * j as f64 / n as f64;
            GeoPoint::unnamed(-22.9 + theta.cos(), -43.2 + theta.sin())
        })
        .collect()
}

fn bench_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("area");
    for &n in &[3usize, 10, 100, 1000] {
        let vertices = ring(n);
        group.bench_with_input(BenchmarkId::new("compute_area", n), &vertices, |b, v| {
            b.iter(|| compute_area(v).unwrap());
        });
    }
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let p = GeoPoint::unnamed(-22.9068, -43.1729);
    group.bench_function("to_projected", |b| {
        b.iter(|| to_projected(&p).unwrap());
    });
    let pp = ProjectedPoint::new(687_409.0, 7_465_634.0, 23, Hemisphere::South);
    group.bench_function("to_geographic", |b| {
        b.iter(|| to_geographic(&pp).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_area, bench_transform);
criterion_main!(benches);
