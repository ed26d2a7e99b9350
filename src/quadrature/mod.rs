//! Jacobi-family quadrature rules.
//!
//! An np-point rule integrates ∫ (1-x)^α (1+x)^β f(x) dx over [-1, 1]:
//! - Gauss: exact up to degree 2np-1
//! - Gauss-Radau (left or right): exact up to degree 2np-2, one endpoint fixed
//! - Gauss-Lobatto: exact up to degree 2np-3, both endpoints fixed
//!
//! Nodes come from the root finders; weights combine a Γ-based scale factor
//! with an auxiliary Jacobi polynomial evaluated at the nodes.

mod gauss;
mod lobatto;
mod radau;

use crate::config::{MAX_POINTS, PolylibConfig, RootFinder};
use crate::error::{PolylibError, Result};
use crate::types::{JacobiParams, PolyType};

/// Nodes and weights of a quadrature rule.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadratureRule {
    /// Quadrature family
    pub poly_type: PolyType,
    /// Weight exponents
    pub params: JacobiParams,
    /// Nodes in [-1, 1], strictly ascending
    pub nodes: Vec<f64>,
    /// Positive weights, paired with `nodes`
    pub weights: Vec<f64>,
}

impl QuadratureRule {
    /// Compute an `np`-point rule with the default root finder.
    pub fn new(poly_type: PolyType, np: usize, params: JacobiParams) -> Result<Self> {
        Self::with_config(poly_type, np, params, &PolylibConfig::default())
    }

    /// Compute an `np`-point rule with an explicit configuration.
    pub fn with_config(
        poly_type: PolyType,
        np: usize,
        params: JacobiParams,
        config: &PolylibConfig,
    ) -> Result<Self> {
        let mut nodes = vec![0.0; np];
        let mut weights = vec![0.0; np];
        cubature_into(
            &mut nodes,
            &mut weights,
            poly_type,
            params,
            config.root_finder,
        )?;
        Ok(Self {
            poly_type,
            params,
            nodes,
            weights,
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for a zero-point rule.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of the weights (the weighted measure of [-1, 1]).
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Approximate ∫ (1-x)^α (1+x)^β f(x) dx.
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        self.nodes
            .iter()
            .zip(self.weights.iter())
            .map(|(&x, &w)| w * f(x))
            .sum()
    }
}

/// Compute an `np`-point rule with the default root finder.
///
/// # Example
/// ```
/// use polylib::quadrature::quadrature;
/// use polylib::types::{JacobiParams, PolyType};
///
/// let rule = quadrature(PolyType::GaussLobatto, 3, JacobiParams::LEGENDRE).unwrap();
/// assert_eq!(rule.nodes[0], -1.0);
/// assert!((rule.weights[1] - 4.0 / 3.0).abs() < 1e-14);
/// ```
pub fn quadrature(poly_type: PolyType, np: usize, params: JacobiParams) -> Result<QuadratureRule> {
    QuadratureRule::new(poly_type, np, params)
}

/// Compute an `np`-point rule with the root finder chosen by `config`.
pub fn quadrature_with_config(
    poly_type: PolyType,
    np: usize,
    params: JacobiParams,
    config: &PolylibConfig,
) -> Result<QuadratureRule> {
    QuadratureRule::with_config(poly_type, np, params, config)
}

/// Compute a rule in place: `z` receives the nodes, `w` the weights.
///
/// The rule size is `z.len()`; `w` must have the same length.
///
/// # Errors
/// - [`PolylibError::DimensionMismatch`] if the buffers differ in length
/// - [`PolylibError::TooManyPoints`] above `MAX_POINTS`
/// - Γ and root-finder errors for unsupported parameters
pub fn cubature_into(
    z: &mut [f64],
    w: &mut [f64],
    poly_type: PolyType,
    params: JacobiParams,
    finder: RootFinder,
) -> Result<()> {
    let np = z.len();
    if w.len() != np {
        return Err(PolylibError::dimension_mismatch("weights", np, w.len()));
    }
    if np > MAX_POINTS {
        return Err(PolylibError::TooManyPoints {
            requested: np,
            max: MAX_POINTS,
        });
    }
    if np == 0 {
        return Ok(());
    }

    match poly_type {
        PolyType::Gauss => gauss::gauss(z, w, params, finder),
        PolyType::GaussRadauLeft => radau::radau_left(z, w, params, finder),
        PolyType::GaussRadauRight => radau::radau_right(z, w, params, finder),
        PolyType::GaussLobatto => lobatto::lobatto(z, w, params, finder),
    }
}
