//! Zeros of Jacobi polynomials.
//!
//! Two independent strategies are provided and must agree to tight tolerance:
//! - Newton iteration with deflation of already-found roots
//! - Eigenvalues of the symmetric tridiagonal Jacobi matrix (Golub-Welsch),
//!   computed with implicit-shift QL
//!
//! Both return the roots in ascending order.

mod deflation;
mod tridiagonal;
mod triql;

pub use deflation::jacobi_zeros_deflation;
pub use tridiagonal::{jacobi_matrix, jacobi_zeros_tridiagonal};
pub use triql::tri_ql;

use crate::config::RootFinder;
use crate::error::Result;
use crate::types::JacobiParams;

/// Fill `z` with the `z.len()` zeros of P_n^(α,β), n = `z.len()`.
pub fn jacobi_zeros(z: &mut [f64], params: JacobiParams, finder: RootFinder) -> Result<()> {
    match finder {
        RootFinder::PolynomialDeflation => jacobi_zeros_deflation(z, params),
        RootFinder::TridiagonalEigen => jacobi_zeros_tridiagonal(z, params),
    }
}

/// Return the `n` zeros of P_n^(α,β) in ascending order.
///
/// # Example
/// ```
/// use polylib::config::RootFinder;
/// use polylib::roots::jacobi_roots;
/// use polylib::types::JacobiParams;
///
/// // P_2 = (3x² - 1)/2 has zeros at ±1/√3
/// let z = jacobi_roots(2, JacobiParams::LEGENDRE, RootFinder::TridiagonalEigen).unwrap();
/// assert!((z[1] - 1.0 / 3f64.sqrt()).abs() < 1e-14);
/// ```
pub fn jacobi_roots(n: usize, params: JacobiParams, finder: RootFinder) -> Result<Vec<f64>> {
    let mut z = vec![0.0; n];
    jacobi_zeros(&mut z, params, finder)?;
    Ok(z)
}
