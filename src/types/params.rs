//! Jacobi weight exponents.

use crate::error::{PolylibError, Result};
use std::fmt;

/// Exponents of the Jacobi weight (1-x)^α (1+x)^β on [-1, 1].
///
/// Both exponents must exceed -1 for the weight to be integrable. The plain
/// constructor does not check this; callers that take parameters from
/// untrusted input should go through [`JacobiParams::try_new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JacobiParams {
    /// Exponent of (1 - x)
    pub alpha: f64,
    /// Exponent of (1 + x)
    pub beta: f64,
}

impl JacobiParams {
    /// Legendre weight (α = β = 0).
    pub const LEGENDRE: Self = Self {
        alpha: 0.0,
        beta: 0.0,
    };

    /// Create parameters without validation.
    #[inline]
    pub const fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Create parameters, rejecting exponents at or below -1.
    pub fn try_new(alpha: f64, beta: f64) -> Result<Self> {
        let params = Self::new(alpha, beta);
        if params.is_valid() {
            Ok(params)
        } else {
            Err(PolylibError::InvalidParameters { alpha, beta })
        }
    }

    /// Check α > -1 and β > -1 (NaN is rejected).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.alpha > -1.0 && self.beta > -1.0
    }

    /// Parameters with both exponents offset.
    #[inline]
    pub fn shifted(self, d_alpha: f64, d_beta: f64) -> Self {
        Self::new(self.alpha + d_alpha, self.beta + d_beta)
    }

    /// α + β
    #[inline]
    pub fn apb(&self) -> f64 {
        self.alpha + self.beta
    }

    /// α - β
    #[inline]
    pub fn amb(&self) -> f64 {
        self.alpha - self.beta
    }
}

impl Default for JacobiParams {
    fn default() -> Self {
        Self::LEGENDRE
    }
}

impl fmt::Display for JacobiParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(α={}, β={})", self.alpha, self.beta)
    }
}

impl From<(f64, f64)> for JacobiParams {
    fn from((alpha, beta): (f64, f64)) -> Self {
        Self::new(alpha, beta)
    }
}
