//! Polynomial basis representations.
//!
//! Vandermonde matrices in the orthonormal Jacobi basis give the modal view
//! of nodal data and an independent route to the differentiation matrix.

mod vandermonde;

pub use vandermonde::Vandermonde;
