//! Symmetric tridiagonal eigenvalues by implicit-shift QL.
//!
//! For each index l the routine looks for the first negligible off-diagonal
//! element at or after l, which splits off an unreduced block. While that
//! block is larger than 1×1 a Wilkinson-shifted QL sweep of Givens rotations
//! is applied to it. The rotations do not preserve ordering, so the
//! eigenvalues are sorted at the end.

use crate::config::MAX_ITERATIONS;
use crate::error::{PolylibError, Result};

/// Replace `d` by the ascending eigenvalues of the symmetric tridiagonal
/// matrix with diagonal `d` and off-diagonal `e`.
///
/// `e[i]` couples rows i and i+1; `e[n-1]` is used as scratch. Both slices
/// are overwritten.
///
/// # Errors
/// - [`PolylibError::DimensionMismatch`] if `e.len() != d.len()`
/// - [`PolylibError::ConvergenceFailure`] if any index needs more than
///   `MAX_ITERATIONS` sweeps
pub fn tri_ql(d: &mut [f64], e: &mut [f64]) -> Result<()> {
    let n = d.len();
    if e.len() != n {
        return Err(PolylibError::dimension_mismatch("off-diagonal", n, e.len()));
    }

    for l in 0..n {
        let mut iter = 0;
        loop {
            // Splitting test: e[m] is negligible against its diagonal neighbours
            let mut m = l;
            while m + 1 < n {
                let dd = d[m].abs() + d[m + 1].abs();
                if e[m].abs() + dd == dd {
                    break;
                }
                m += 1;
            }
            if m == l {
                break;
            }

            if iter == MAX_ITERATIONS {
                log::debug!("tri_ql: index {l} not converged after {iter} sweeps");
                return Err(PolylibError::ConvergenceFailure {
                    method: "TriQL",
                    limit: MAX_ITERATIONS,
                });
            }
            iter += 1;

            // Wilkinson shift
            let mut g = (d[l + 1] - d[l]) / (2.0 * e[l]);
            let mut r = (g * g + 1.0).sqrt();
            let signed_r = if g < 0.0 { -r } else { r };
            g = d[m] - d[l] + e[l] / (g + signed_r);

            let mut s = 1.0;
            let mut c = 1.0;
            let mut p = 0.0;
            for i in (l..m).rev() {
                let f = s * e[i];
                let b = c * e[i];
                if f.abs() >= g.abs() {
                    c = g / f;
                    r = (c * c + 1.0).sqrt();
                    e[i + 1] = f * r;
                    s = 1.0 / r;
                    c *= s;
                } else {
                    s = f / g;
                    r = (s * s + 1.0).sqrt();
                    e[i + 1] = g * r;
                    c = 1.0 / r;
                    s *= c;
                }
                g = d[i + 1] - p;
                r = (d[i] - g) * s + 2.0 * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;
            }
            d[l] -= p;
            e[l] = g;
            e[m] = 0.0;
        }
        log::trace!("tri_ql: index {l} converged after {iter} sweeps");
    }

    // Selection sort, ascending
    for i in 0..n.saturating_sub(1) {
        let mut k = i;
        let mut p = d[i];
        for (j, &dj) in d.iter().enumerate().skip(i + 1) {
            if dj < p {
                k = j;
                p = dj;
            }
        }
        d[k] = d[i];
        d[i] = p;
    }

    Ok(())
}
