//! Fixed limits and root-finder selection.
//!
//! All scratch storage in the crate is sized from these constants, so no
//! routine allocates on the heap for its temporaries.

/// Maximum number of quadrature points supported by any routine.
pub const MAX_POINTS: usize = 64;

/// Maximum Jacobi polynomial degree the recurrence buffers can hold.
pub const MAX_ORDER: usize = 2 * MAX_POINTS - 1;

/// Iteration cap for Newton deflation and for each QL index.
pub const MAX_ITERATIONS: usize = 50;

/// Convergence tolerance for Newton updates and node coincidence tests.
pub const TOLERANCE: f64 = 50.0 * f64::EPSILON;

/// Strategy used to locate the zeros of a Jacobi polynomial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RootFinder {
    /// Newton iteration on the recurrence with deflation of found roots.
    PolynomialDeflation,
    /// Eigenvalues of the symmetric tridiagonal Jacobi matrix.
    #[default]
    TridiagonalEigen,
}

/// Options shared by the quadrature and operator builders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolylibConfig {
    /// Root finder used for node computation.
    pub root_finder: RootFinder,
}

impl PolylibConfig {
    /// Create a configuration with the default root finder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the root finder.
    pub fn with_root_finder(mut self, root_finder: RootFinder) -> Self {
        self.root_finder = root_finder;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_consistent() {
        assert_eq!(MAX_ORDER, 2 * MAX_POINTS - 1);
        assert!(TOLERANCE > f64::EPSILON);
        assert!(TOLERANCE < 1e-12);
    }

    #[test]
    fn test_config_builder() {
        let config = PolylibConfig::new();
        assert_eq!(config.root_finder, RootFinder::TridiagonalEigen);

        let config = config.with_root_finder(RootFinder::PolynomialDeflation);
        assert_eq!(config.root_finder, RootFinder::PolynomialDeflation);
    }
}
