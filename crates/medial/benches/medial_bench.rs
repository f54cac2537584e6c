//! Criterion benchmarks for triangulation and the full medial-axis pipeline.
//! Focus sizes: n in {10, 50, 100, 300} polygon vertices (300 is the loader default).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p medial

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use medial::delaunay::triangulate;
use medial::geom2::rand::{sample_polygon, RadialCfg};
use medial::geom2::Polygon;
use medial::medial::compute_medial_axis;

fn random_polygon(n: usize, seed: u64) -> Polygon {
    sample_polygon(&RadialCfg::with_vertices(n, n), seed).expect("radial draw")
}

fn bench_medial(c: &mut Criterion) {
    let mut group = c.benchmark_group("medial");
    for &n in &[10usize, 50, 100, 300] {
        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, &n| {
            b.iter_batched(
                || random_polygon(n, 43),
                |p| {
                    let _t = triangulate(p.vertices()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("compute_medial_axis", n), &n, |b, &n| {
            b.iter_batched(
                || random_polygon(n, 44),
                |p| {
                    let _axis = compute_medial_axis(&p).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_medial);
criterion_main!(benches);
