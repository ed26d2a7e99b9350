//! Jacobi polynomial evaluation.
//!
//! This module provides:
//! - Slice-based evaluation of P_n^(α,β) and its derivative at many points
//! - Scalar conveniences for single abscissas
//! - The squared norm of P_n^(α,β) under its weight

mod jacobi;

pub use jacobi::{
    jacobi, jacobi_and_derivative, jacobi_derivative, jacobi_norm_squared, jacobi_polynomial,
    jacobi_polynomial_derivative,
};
