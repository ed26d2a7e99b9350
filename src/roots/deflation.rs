//! Newton iteration with polynomial deflation.
//!
//! The k-th root is sought from a Chebyshev seed, averaged with the previous
//! root, using the deflated Newton update
//!
//! r ← r - P(r) / (P'(r) - P(r) Σ_{i<k} 1/(r - z_i))
//!
//! which is Newton's method on P(r) / Π_{i<k}(r - z_i). Removing the known
//! roots keeps the iteration from falling back onto them.

use std::f64::consts::PI;

use crate::config::{MAX_ITERATIONS, TOLERANCE};
use crate::error::{PolylibError, Result};
use crate::polynomial::jacobi_polynomial;
use crate::types::JacobiParams;

/// Fill `z` with the zeros of P_n^(α,β), n = `z.len()`, by deflated Newton.
///
/// # Errors
/// [`PolylibError::ConvergenceFailure`] if a root needs more than
/// `MAX_ITERATIONS` updates.
pub fn jacobi_zeros_deflation(z: &mut [f64], params: JacobiParams) -> Result<()> {
    let n = z.len();
    if n == 0 {
        return Ok(());
    }

    let dth = PI / (2.0 * n as f64);
    let mut rlast = 0.0;

    for k in 0..n {
        let mut r = -((2.0 * k as f64 + 1.0) * dth).cos();
        if k > 0 {
            r = 0.5 * (r + rlast);
        }

        let mut converged = false;
        for iter in 0..MAX_ITERATIONS {
            let mut poly = [0.0];
            let mut pder = [0.0];
            jacobi_polynomial(&[r], &mut poly, Some(&mut pder), n, params)?;

            let sum: f64 = z[..k].iter().map(|&zi| 1.0 / (r - zi)).sum();
            let delr = -poly[0] / (pder[0] - sum * poly[0]);
            r += delr;

            if delr.abs() < TOLERANCE {
                log::trace!("deflation: root {k} of P_{n}{params} after {} steps", iter + 1);
                converged = true;
                break;
            }
        }

        if !converged {
            log::debug!("deflation: root {k} of P_{n}{params} did not converge");
            return Err(PolylibError::ConvergenceFailure {
                method: "Newton deflation",
                limit: MAX_ITERATIONS,
            });
        }

        z[k] = r;
        rlast = r;
    }

    Ok(())
}
