//! Closed-form Gamma function on integers and half-integers.
//!
//! Quadrature weights and the boundary terms of the differentiation matrices
//! only ever need Γ at integer or half-integer arguments (α and β are
//! combined with integers), so the function is evaluated by descending
//! products instead of a general approximation:
//!
//! - Γ(n)       = (n-1)!
//! - Γ(n + 1/2) = √π · (n - 1/2)(n - 3/2)···(1/2)
//!
//! Two special values are also accepted: Γ(-1/2) = -2√π, and x = 0 which
//! returns 1 by convention (it only appears in products where the
//! degenerate factor is never used).

use crate::error::{PolylibError, Result};
use std::f64::consts::PI;

/// Largest lattice argument for which Γ(x) is finite in double precision.
///
/// Γ(171.5) ≈ 9.5e307 still fits; Γ(172) = 171! does not.
pub const MAX_GAMMA_ARGUMENT: f64 = 171.5;

/// Evaluate Γ(x) for x in {-1/2, 0} or a positive integer/half-integer.
///
/// # Errors
/// - [`PolylibError::NonHalfIntegerGamma`] for any other argument
/// - [`PolylibError::GammaOverflow`] above [`MAX_GAMMA_ARGUMENT`]
///
/// # Example
/// ```
/// use polylib::special::gamma_function;
///
/// assert_eq!(gamma_function(5.0).unwrap(), 24.0);
/// let g = gamma_function(2.5).unwrap();
/// assert!((g - 0.75 * std::f64::consts::PI.sqrt()).abs() < 1e-14);
/// assert!(gamma_function(1.3).is_err());
/// ```
pub fn gamma_function(x: f64) -> Result<f64> {
    if x == -0.5 {
        return Ok(-2.0 * PI.sqrt());
    }
    if x == 0.0 {
        return Ok(1.0);
    }
    if !(x > 0.0) {
        log::debug!("gamma_function: rejected argument {x}");
        return Err(PolylibError::NonHalfIntegerGamma(x));
    }
    if x > MAX_GAMMA_ARGUMENT {
        return Err(PolylibError::GammaOverflow(x));
    }

    let whole = x.trunc();
    let frac = x - whole;
    let n = whole as usize;

    if frac == 0.5 {
        // √π (x-1)(x-2)...(1/2)
        let mut tmp = x;
        let mut gamma = PI.sqrt();
        for _ in 0..n {
            tmp -= 1.0;
            gamma *= tmp;
        }
        Ok(gamma)
    } else if frac == 0.0 {
        // (x-1)(x-2)...1
        let mut tmp = x;
        let mut gamma = 1.0;
        for _ in 1..n {
            tmp -= 1.0;
            gamma *= tmp;
        }
        Ok(gamma)
    } else {
        log::debug!("gamma_function: rejected argument {x}");
        Err(PolylibError::NonHalfIntegerGamma(x))
    }
}
