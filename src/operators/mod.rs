//! Collocation operators on a node set.
//!
//! This module provides:
//! - Closed-form differentiation matrices for the four node families
//! - Lagrange shape functions and interpolation matrices between node sets

mod differentiation;
mod interpolation;

pub use differentiation::{derivative_matrix, derivative_matrix_into};
pub use interpolation::{interpolation_matrix, interpolation_matrix_into, lagrangian_interpolant};
