//! Benchmarks for differentiation and interpolation operators.
//!
//! Run with: `cargo bench --bench operators_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use polylib::{
    JacobiParams, PolyType, Vandermonde, derivative_matrix, interpolation_matrix, quadrature,
};

/// Closed-form differentiation matrix versus the Vandermonde route.
fn bench_differentiation(c: &mut Criterion) {
    let mut group = c.benchmark_group("differentiation_matrix");
    let params = JacobiParams::LEGENDRE;

    for np in [8, 16, 32] {
        let rule = quadrature(PolyType::GaussLobatto, np, params).unwrap();

        group.bench_with_input(BenchmarkId::new("closed_form", np), &rule.nodes, |b, z| {
            b.iter(|| derivative_matrix(PolyType::GaussLobatto, black_box(z), params))
        });
        group.bench_with_input(BenchmarkId::new("vandermonde", np), &rule.nodes, |b, z| {
            b.iter(|| {
                Vandermonde::new(black_box(z), params).map(|v| v.differentiation_matrix())
            })
        });
    }

    group.finish();
}

/// Interpolation onto a fine uniform grid.
fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation_matrix");
    let params = JacobiParams::new(1.0, 1.0);
    let targets: Vec<f64> = (0..200).map(|k| -1.0 + 2.0 * k as f64 / 199.0).collect();

    for np in [8, 16] {
        let rule = quadrature(PolyType::Gauss, np, params).unwrap();

        group.bench_with_input(BenchmarkId::new("gauss_to_uniform", np), &rule.nodes, |b, z| {
            b.iter(|| interpolation_matrix(PolyType::Gauss, black_box(z), &targets, params))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_differentiation, bench_interpolation);
criterion_main!(benches);
