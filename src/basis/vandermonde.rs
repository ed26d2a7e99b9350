//! Jacobi Vandermonde matrix for nodal-modal transformations.
//!
//! The Vandermonde matrix V connects nodal and modal representations:
//! - V[i,j] = φ_j(r_i) where φ_j is the j-th orthonormal Jacobi polynomial
//! - nodal_values = V * modal_coeffs
//! - modal_coeffs = V^{-1} * nodal_values
//!
//! With φ_j = P_j^(α,β) / sqrt(h_j) the modal mass matrix under the weight
//! (1-x)^α (1+x)^β is the identity.

use faer::{Mat, linalg::solvers::Solve};

use crate::error::{PolylibError, Result};
use crate::polynomial::{jacobi_and_derivative, jacobi_norm_squared};
use crate::types::JacobiParams;

/// Vandermonde matrix, its inverse, and the derivative Vandermonde.
#[derive(Clone, Debug)]
pub struct Vandermonde {
    /// V[i,j] = φ_j(r_i)
    pub v: Mat<f64>,
    /// Inverse Vandermonde matrix
    pub v_inv: Mat<f64>,
    /// Vr[i,j] = φ'_j(r_i)
    pub vr: Mat<f64>,
    /// Polynomial order (number of nodes minus one)
    pub order: usize,
    /// Weight exponents of the basis
    pub params: JacobiParams,
}

impl Vandermonde {
    /// Build the Vandermonde matrices on `nodes`.
    ///
    /// The nodes must be distinct. α and β must be multiples of 1/2 so the
    /// normalisation can be evaluated.
    pub fn new(nodes: &[f64], params: JacobiParams) -> Result<Self> {
        let n = nodes.len();
        if n == 0 {
            return Err(PolylibError::dimension_mismatch("Vandermonde nodes", 1, 0));
        }

        let norms = (0..n)
            .map(|j| jacobi_norm_squared(j, params).map(f64::sqrt))
            .collect::<Result<Vec<_>>>()?;

        let mut v = Mat::zeros(n, n);
        let mut vr = Mat::zeros(n, n);
        for (i, &r) in nodes.iter().enumerate() {
            for (j, &norm) in norms.iter().enumerate() {
                let (p, dp) = jacobi_and_derivative(j, params, r)?;
                v[(i, j)] = p / norm;
                vr[(i, j)] = dp / norm;
            }
        }

        let lu = v.as_ref().full_piv_lu();
        let mut identity = Mat::zeros(n, n);
        for j in 0..n {
            identity[(j, j)] = 1.0;
        }
        let v_inv = lu.solve(&identity);

        log::debug!("Vandermonde order {} built for {}", n - 1, params);

        Ok(Self {
            v,
            v_inv,
            vr,
            order: n - 1,
            params,
        })
    }

    /// Number of nodes (and modes).
    pub fn len(&self) -> usize {
        self.order + 1
    }

    /// Always false; a Vandermonde matrix holds at least one node.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Differentiation matrix Dr = Vr * V^{-1}.
    pub fn differentiation_matrix(&self) -> Mat<f64> {
        &self.vr * &self.v_inv
    }

    /// Modal coefficients of nodal data: V^{-1} u.
    pub fn to_modal(&self, nodal: &[f64]) -> Result<Vec<f64>> {
        apply(&self.v_inv, nodal)
    }

    /// Nodal values of modal data: V û.
    pub fn to_nodal(&self, modal: &[f64]) -> Result<Vec<f64>> {
        apply(&self.v, modal)
    }
}

fn apply(m: &Mat<f64>, x: &[f64]) -> Result<Vec<f64>> {
    if x.len() != m.ncols() {
        return Err(PolylibError::dimension_mismatch(
            "Vandermonde vector",
            m.ncols(),
            x.len(),
        ));
    }
    let mut y = vec![0.0; m.nrows()];
    for (i, yi) in y.iter_mut().enumerate() {
        for (j, &xj) in x.iter().enumerate() {
            *yi += m[(i, j)] * xj;
        }
    }
    Ok(y)
}
