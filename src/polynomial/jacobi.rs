//! Jacobi polynomials P_n^(α,β) by three-term recurrence.
//!
//! Jacobi polynomials are orthogonal on [-1, 1] with weight (1-x)^α (1+x)^β.
//! With apb = α + β and amb = α - β:
//!
//! P_0(x) = 1
//! P_1(x) = (amb + (apb + 2) x) / 2
//! P_k(x) = (a2_k + a3_k x) P_{k-1}(x) - a4_k P_{k-2}(x),  k >= 2
//!
//! where, with a1_k = 2k (k + apb)(2k + apb - 2),
//!
//! a2_k = (2k + apb - 1) apb amb / a1_k
//! a3_k = (2k + apb - 2)(2k + apb - 1)(2k + apb) / a1_k
//! a4_k = 2 (k + α - 1)(k + β - 1)(2k + apb) / a1_k
//!
//! The derivative is recovered from the last two recurrence terms:
//!
//! (1 - x²) P'_n = [n (amb - (2n + apb) x) P_n + 2 (n + α)(n + β) P_{n-1}] / (2n + apb)
//!
//! which is singular at x = ±1. Where endpoint derivatives are needed, use
//! [`jacobi_polynomial_derivative`], which applies the identity
//! d/dx P_n^(α,β) = (n + α + β + 1)/2 · P_{n-1}^(α+1,β+1).

use crate::config::MAX_ORDER;
use crate::error::{PolylibError, Result};
use crate::types::JacobiParams;

/// Recurrence coefficients a2, a3, a4 for degrees 2..=n.
///
/// Sized for the largest supported degree so that evaluation never allocates.
struct RecurrenceTable {
    a2: [f64; MAX_ORDER - 1],
    a3: [f64; MAX_ORDER - 1],
    a4: [f64; MAX_ORDER - 1],
}

impl RecurrenceTable {
    /// Build the table for degree `n` (2 <= n <= MAX_ORDER).
    fn new(n: usize, params: JacobiParams) -> Self {
        let apb = params.apb();
        let amb = params.amb();
        let mut table = Self {
            a2: [0.0; MAX_ORDER - 1],
            a3: [0.0; MAX_ORDER - 1],
            a4: [0.0; MAX_ORDER - 1],
        };

        for k in 2..=n {
            let kf = k as f64;
            let a1 = 2.0 * kf * (kf + apb) * (2.0 * kf + apb - 2.0);
            table.a2[k - 2] = (2.0 * kf + apb - 1.0) * (apb * amb) / a1;
            table.a3[k - 2] =
                (2.0 * kf + apb - 2.0) * (2.0 * kf + apb - 1.0) * (2.0 * kf + apb) / a1;
            table.a4[k - 2] =
                2.0 * (kf + params.alpha - 1.0) * (kf + params.beta - 1.0) * (2.0 * kf + apb) / a1;
        }

        table
    }

    /// Return (P_n(z), P_{n-1}(z)) for n >= 2.
    #[inline]
    fn eval(&self, n: usize, params: JacobiParams, z: f64) -> (f64, f64) {
        let mut p2 = 1.0;
        let mut p1 = 0.5 * (params.amb() + (params.apb() + 2.0) * z);
        let mut p0 = (self.a2[0] + self.a3[0] * z) * p1 - self.a4[0] * p2;

        for k in 1..n - 1 {
            p2 = p1;
            p1 = p0;
            p0 = (self.a2[k] + self.a3[k] * z) * p1 - self.a4[k] * p2;
        }

        (p0, p1)
    }
}

/// Evaluate P_n^(α,β) at every point of `z`, and optionally its derivative.
///
/// `poly` (and `deriv`, when given) must have the same length as `z`.
/// The derivative for n >= 2 uses the closed form in the module docs and is
/// therefore undefined at z = ±1.
///
/// # Errors
/// - [`PolylibError::DegreeTooLarge`] if `n > MAX_ORDER`
/// - [`PolylibError::DimensionMismatch`] on buffer length mismatch
pub fn jacobi_polynomial(
    z: &[f64],
    poly: &mut [f64],
    deriv: Option<&mut [f64]>,
    n: usize,
    params: JacobiParams,
) -> Result<()> {
    if poly.len() != z.len() {
        return Err(PolylibError::dimension_mismatch(
            "polynomial buffer",
            z.len(),
            poly.len(),
        ));
    }
    if let Some(d) = deriv.as_deref() {
        if d.len() != z.len() {
            return Err(PolylibError::dimension_mismatch(
                "derivative buffer",
                z.len(),
                d.len(),
            ));
        }
    }
    if z.is_empty() {
        return Ok(());
    }

    let apb = params.apb();

    match n {
        0 => {
            poly.fill(1.0);
            if let Some(d) = deriv {
                d.fill(0.0);
            }
        }
        1 => {
            for (p, &zi) in poly.iter_mut().zip(z) {
                *p = 0.5 * (params.amb() + (apb + 2.0) * zi);
            }
            if let Some(d) = deriv {
                d.fill(0.5 * (apb + 2.0));
            }
        }
        _ => {
            if n > MAX_ORDER {
                log::debug!("jacobi_polynomial: degree {n} above ceiling {MAX_ORDER}");
                return Err(PolylibError::DegreeTooLarge {
                    requested: n,
                    max: MAX_ORDER,
                });
            }

            let table = RecurrenceTable::new(n, params);
            let nf = n as f64;
            let ad4 = 2.0 * nf + apb;
            let ad1 = nf * params.amb() / ad4;
            let ad2 = nf * (2.0 * nf + apb) / ad4;
            let ad3 = 2.0 * (nf + params.alpha) * (nf + params.beta) / ad4;

            match deriv {
                Some(d) => {
                    for ((p, dp), &zi) in poly.iter_mut().zip(d.iter_mut()).zip(z) {
                        let (pn, pn1) = table.eval(n, params, zi);
                        *dp = ((ad1 - ad2 * zi) * pn + ad3 * pn1) / (1.0 - zi * zi);
                        *p = pn;
                    }
                }
                None => {
                    for (p, &zi) in poly.iter_mut().zip(z) {
                        *p = table.eval(n, params, zi).0;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Evaluate d/dz P_n^(α,β) at every point of `z`.
///
/// Uses d/dz P_n^(α,β) = (α + β + n + 1)/2 · P_{n-1}^(α+1,β+1), so the result
/// is well defined at z = ±1.
pub fn jacobi_polynomial_derivative(
    z: &[f64],
    deriv: &mut [f64],
    n: usize,
    params: JacobiParams,
) -> Result<()> {
    if n == 0 {
        if deriv.len() != z.len() {
            return Err(PolylibError::dimension_mismatch(
                "derivative buffer",
                z.len(),
                deriv.len(),
            ));
        }
        deriv.fill(0.0);
        return Ok(());
    }

    jacobi_polynomial(z, deriv, None, n - 1, params.shifted(1.0, 1.0))?;
    let scale = 0.5 * (params.apb() + n as f64 + 1.0);
    for d in deriv.iter_mut() {
        *d *= scale;
    }
    Ok(())
}

/// Evaluate P_n^(α,β)(x).
pub fn jacobi(n: usize, params: JacobiParams, x: f64) -> Result<f64> {
    let mut p = [0.0];
    jacobi_polynomial(&[x], &mut p, None, n, params)?;
    Ok(p[0])
}

/// Evaluate d/dx P_n^(α,β)(x), valid on the closed interval.
pub fn jacobi_derivative(n: usize, params: JacobiParams, x: f64) -> Result<f64> {
    let mut d = [0.0];
    jacobi_polynomial_derivative(&[x], &mut d, n, params)?;
    Ok(d[0])
}

/// Evaluate both P_n^(α,β)(x) and its derivative.
pub fn jacobi_and_derivative(n: usize, params: JacobiParams, x: f64) -> Result<(f64, f64)> {
    Ok((jacobi(n, params, x)?, jacobi_derivative(n, params, x)?))
}

/// Squared weighted norm ∫ (1-x)^α (1+x)^β [P_n^(α,β)(x)]² dx.
///
/// h_n = 2^(α+β+1) / (2n+α+β+1) · Γ(n+α+1) Γ(n+β+1) / (Γ(n+α+β+1) n!)
///
/// Γ is only available at integer and half-integer arguments, so α and β
/// must be multiples of 1/2.
pub fn jacobi_norm_squared(n: usize, params: JacobiParams) -> Result<f64> {
    use crate::special::gamma_function;

    let nf = n as f64;
    let apb = params.apb();
    let mut h = 2f64.powf(apb + 1.0) / (2.0 * nf + apb + 1.0);
    h *= gamma_function(nf + params.alpha + 1.0)? * gamma_function(nf + params.beta + 1.0)?;
    h /= gamma_function(nf + apb + 1.0)? * gamma_function(nf + 1.0)?;
    Ok(h)
}
