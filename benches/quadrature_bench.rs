//! Benchmarks for root finding and quadrature construction.
//!
//! Run with: `cargo bench --bench quadrature_bench`
//!
//! Compares Newton deflation against the tridiagonal eigensolver.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use polylib::{
    JacobiParams, PolyType, PolylibConfig, RootFinder, jacobi_roots, quadrature_with_config,
};

/// Benchmark both root finders over a range of degrees.
fn bench_root_finders(c: &mut Criterion) {
    let mut group = c.benchmark_group("jacobi_roots");
    let params = JacobiParams::new(1.0, 0.5);

    for n in [4, 8, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("deflation", n), &n, |b, &n| {
            b.iter(|| jacobi_roots(black_box(n), params, RootFinder::PolynomialDeflation))
        });
        group.bench_with_input(BenchmarkId::new("tridiagonal", n), &n, |b, &n| {
            b.iter(|| jacobi_roots(black_box(n), params, RootFinder::TridiagonalEigen))
        });
    }

    group.finish();
}

/// Benchmark full rule construction for each family.
fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadrature_rule");
    let params = JacobiParams::LEGENDRE;
    let config = PolylibConfig::default();

    for poly_type in PolyType::ALL {
        for np in [8, 32] {
            group.bench_with_input(
                BenchmarkId::new(poly_type.name(), np),
                &np,
                |b, &np| {
                    b.iter(|| {
                        quadrature_with_config(poly_type, black_box(np), params, &config)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_root_finders, bench_rules);
criterion_main!(benches);
