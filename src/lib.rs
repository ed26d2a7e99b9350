//! # polylib-rs
//!
//! Jacobi-family polynomial machinery for spectral and spectral/hp element
//! methods on the reference interval [-1, 1].
//!
//! This crate provides:
//! - Jacobi polynomials P_n^(α,β) and their derivatives (recurrence based)
//! - Zeros of P_n^(α,β) by Newton deflation or by a tridiagonal eigensolver
//! - Gauss, Gauss-Radau (left/right) and Gauss-Lobatto quadrature rules
//! - Collocation differentiation matrices and Lagrange interpolation
//! - A Gamma function for integer and half-integer arguments
//! - Orthonormal Jacobi Vandermonde matrices as a modal cross-check
//!
//! # Example
//!
//! ```
//! use polylib::{JacobiParams, PolyType, quadrature};
//!
//! let rule = quadrature(PolyType::Gauss, 4, JacobiParams::LEGENDRE).unwrap();
//! let integral: f64 = rule.integrate(|x| x * x);
//! assert!((integral - 2.0 / 3.0).abs() < 1e-14);
//! ```

pub mod basis;
pub mod config;
pub mod error;
pub mod operators;
pub mod polynomial;
pub mod quadrature;
pub mod roots;
pub mod special;
pub mod types;

// Re-export main types for convenience
pub use basis::Vandermonde;
pub use config::{MAX_ITERATIONS, MAX_ORDER, MAX_POINTS, PolylibConfig, RootFinder, TOLERANCE};
pub use error::{ErrorKind, PolylibError, Result};
pub use operators::{
    derivative_matrix, derivative_matrix_into, interpolation_matrix, interpolation_matrix_into,
    lagrangian_interpolant,
};
pub use polynomial::{
    jacobi, jacobi_and_derivative, jacobi_derivative, jacobi_norm_squared, jacobi_polynomial,
    jacobi_polynomial_derivative,
};
pub use quadrature::{QuadratureRule, cubature_into, quadrature, quadrature_with_config};
pub use roots::{jacobi_roots, jacobi_zeros};
pub use special::gamma_function;
pub use types::{JacobiParams, PolyType};
