//! Zeros of P_n^(α,β) as eigenvalues of the Jacobi matrix.
//!
//! The orthonormal Jacobi polynomials satisfy a symmetric three-term
//! recurrence whose coefficients form an n×n tridiagonal matrix J with
//!
//! J[i,i]   = (β² - α²) / ((2i + α + β)(2i + α + β + 2))
//! J[i,i+1] = sqrt(4(i+1)(i+1+α)(i+1+β)(i+1+α+β)
//!                 / ((2i+α+β+1)(2i+α+β+2)²(2i+α+β+3)))
//!
//! The i = 0 entries are written in reduced form to avoid 0/0 when
//! α + β = 0 or α + β = -1. The eigenvalues of J are the zeros of P_n^(α,β).

use crate::config::MAX_POINTS;
use crate::error::{PolylibError, Result};
use crate::types::JacobiParams;

use super::triql::tri_ql;

/// Fill the diagonal `d` and off-diagonal `e` of the n×n Jacobi matrix.
///
/// `e[i]` couples rows i and i+1; `e[n-1]` is scratch for the eigensolver
/// and is set to zero.
pub fn jacobi_matrix(d: &mut [f64], e: &mut [f64], params: JacobiParams) -> Result<()> {
    let n = d.len();
    if e.len() != n {
        return Err(PolylibError::dimension_mismatch("off-diagonal", n, e.len()));
    }
    if n == 0 {
        return Ok(());
    }

    let (alpha, beta) = (params.alpha, params.beta);
    let apb = params.apb();
    let mut apbi = 2.0 + apb;

    d[0] = (beta - alpha) / apbi;
    e[0] = (4.0 * (1.0 + alpha) * (1.0 + beta) / ((apbi + 1.0) * apbi * apbi)).sqrt();

    let a2b2 = beta * beta - alpha * alpha;
    for i in 1..n.saturating_sub(1) {
        let ip1 = (i + 1) as f64;
        apbi = 2.0 * ip1 + apb;
        d[i] = a2b2 / ((apbi - 2.0) * apbi);
        e[i] = (4.0 * ip1 * (ip1 + alpha) * (ip1 + beta) * (ip1 + apb)
            / ((apbi * apbi - 1.0) * apbi * apbi))
            .sqrt();
    }

    // n = 1 keeps the reduced first entry; only the general formula applies beyond it
    if n > 1 {
        apbi = 2.0 * n as f64 + apb;
        d[n - 1] = a2b2 / ((apbi - 2.0) * apbi);
    }
    e[n - 1] = 0.0;

    Ok(())
}

/// Fill `z` with the zeros of P_n^(α,β), n = `z.len()`, via the Jacobi matrix.
///
/// # Errors
/// - [`PolylibError::TooManyPoints`] above `MAX_POINTS`
/// - [`PolylibError::ConvergenceFailure`] from the QL iteration
pub fn jacobi_zeros_tridiagonal(z: &mut [f64], params: JacobiParams) -> Result<()> {
    let n = z.len();
    if n == 0 {
        return Ok(());
    }
    if n > MAX_POINTS {
        return Err(PolylibError::TooManyPoints {
            requested: n,
            max: MAX_POINTS,
        });
    }

    let mut e = [0.0; MAX_POINTS];
    jacobi_matrix(z, &mut e[..n], params)?;

    if n == 1 {
        return Ok(());
    }
    tri_ql(z, &mut e[..n])
}
