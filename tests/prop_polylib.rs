//! Property-based tests using proptest.
//!
//! Covers: quadrature weights and nodes, interpolation partition of unity,
//! root finder agreement, Gamma recurrence.

use polylib::{
    JacobiParams, PolyType, RootFinder, gamma_function, jacobi_roots, lagrangian_interpolant,
    quadrature,
};
use proptest::prelude::*;

/// Half-integer exponents in [0, 3].
fn arb_params() -> impl Strategy<Value = JacobiParams> {
    (0u32..=6, 0u32..=6).prop_map(|(a, b)| JacobiParams::new(a as f64 * 0.5, b as f64 * 0.5))
}

fn arb_poly_type() -> impl Strategy<Value = PolyType> {
    prop::sample::select(PolyType::ALL.to_vec())
}

fn total_measure(params: JacobiParams) -> f64 {
    let (a, b) = (params.alpha, params.beta);
    2f64.powf(a + b + 1.0) * gamma_function(a + 1.0).unwrap() * gamma_function(b + 1.0).unwrap()
        / gamma_function(a + b + 2.0).unwrap()
}

// ── Quadrature Properties ────────────────────────────────────────────

proptest! {
    /// Weights are positive and sum to the measure of the weight function.
    #[test]
    fn weights_positive_and_sum_to_measure(
        poly_type in arb_poly_type(),
        np in 2usize..24,
        params in arb_params(),
    ) {
        let rule = quadrature(poly_type, np, params).unwrap();
        let expected = total_measure(params);
        prop_assert!(rule.weights.iter().all(|&w| w > 0.0));
        prop_assert!((rule.total_weight() - expected).abs() < 1e-10 * expected,
            "{} np={} {}: {} vs {}", poly_type, np, params, rule.total_weight(), expected);
    }

    /// Nodes are strictly ascending inside the closed interval.
    #[test]
    fn nodes_ascending_in_interval(
        poly_type in arb_poly_type(),
        np in 2usize..24,
        params in arb_params(),
    ) {
        let rule = quadrature(poly_type, np, params).unwrap();
        prop_assert!(rule.nodes.iter().all(|&z| (-1.0..=1.0).contains(&z)));
        for pair in rule.nodes.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Shape functions sum to one anywhere in the interval.
    #[test]
    fn interpolants_partition_unity(
        poly_type in arb_poly_type(),
        np in 2usize..14,
        params in arb_params(),
        z in -1.0f64..=1.0,
    ) {
        let rule = quadrature(poly_type, np, params).unwrap();
        let sum: f64 = (0..np)
            .map(|i| lagrangian_interpolant(poly_type, i, z, &rule.nodes, params).unwrap())
            .sum();
        prop_assert!((sum - 1.0).abs() < 1e-10, "sum = {}", sum);
    }

    /// Newton deflation and the tridiagonal eigensolver find the same roots.
    #[test]
    fn root_finders_agree(n in 1usize..30, params in arb_params()) {
        let a = jacobi_roots(n, params, RootFinder::PolynomialDeflation).unwrap();
        let b = jacobi_roots(n, params, RootFinder::TridiagonalEigen).unwrap();
        for (x, y) in a.iter().zip(&b) {
            prop_assert!((x - y).abs() < 1e-10, "{} vs {}", x, y);
        }
    }
}

// ── Gamma Properties ─────────────────────────────────────────────────

proptest! {
    /// Γ(x+1) = x Γ(x) on the half-integer lattice.
    #[test]
    fn gamma_recurrence(k in 1u32..300) {
        let x = k as f64 * 0.5;
        let lhs = gamma_function(x + 1.0).unwrap();
        let rhs = x * gamma_function(x).unwrap();
        prop_assert!((lhs - rhs).abs() <= 1e-12 * lhs.abs());
    }

    /// Non-lattice arguments are rejected.
    #[test]
    fn gamma_rejects_off_lattice(k in 1u32..100, frac in 0.05f64..0.45) {
        prop_assert!(gamma_function(k as f64 + frac).is_err());
    }
}
