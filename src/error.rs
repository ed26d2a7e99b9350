//! Error types for polynomial, quadrature and operator construction.

use thiserror::Error;

/// Broad classification of a [`PolylibError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call was made with arguments outside the supported domain.
    PreconditionViolation,
    /// An iterative method hit its iteration cap.
    ConvergenceFailure,
}

/// Errors raised by the Jacobi polynomial library.
///
/// Every error aborts the whole call; no partial results are returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolylibError {
    /// Gamma was asked for an argument that is not an integer or half-integer.
    #[error("Gamma argument {0} is not of integer or half-integer order")]
    NonHalfIntegerGamma(f64),

    /// Gamma argument large enough that the result overflows f64.
    #[error("Gamma argument {0} overflows double precision")]
    GammaOverflow(f64),

    /// Polynomial degree above the recurrence buffer ceiling.
    #[error("Requested polynomial degree {requested} exceeds maximum {max}")]
    DegreeTooLarge { requested: usize, max: usize },

    /// Number of points above the scratch buffer ceiling.
    #[error("Requested {requested} points, maximum supported is {max}")]
    TooManyPoints { requested: usize, max: usize },

    /// Jacobi exponents outside (-1, inf).
    #[error("Invalid Jacobi parameters alpha={alpha}, beta={beta}: both must exceed -1")]
    InvalidParameters { alpha: f64, beta: f64 },

    /// Buffer or matrix shape does not match the requested size.
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Shape-function index outside the node set.
    #[error("Node index {index} out of range for {len} nodes")]
    NodeIndexOutOfRange { index: usize, len: usize },

    /// Iteration cap exceeded.
    #[error("{method}: too many iterations (limit {limit})")]
    ConvergenceFailure { method: &'static str, limit: usize },
}

impl PolylibError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConvergenceFailure { .. } => ErrorKind::ConvergenceFailure,
            _ => ErrorKind::PreconditionViolation,
        }
    }

    /// Create a dimension mismatch error.
    pub(crate) fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolylibError>;
