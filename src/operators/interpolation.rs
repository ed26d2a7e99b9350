//! Lagrange shape functions and interpolation matrices.
//!
//! The i-th shape function on a node set equals 1 at z_i and 0 at every
//! other node. Writing the nodes as the zeros of ω(x),
//!
//! h_i(z) = ω(z) / (ω'(z_i) (z - z_i))
//!
//! with ω depending on the family:
//! - Gauss:       ω = P_n^(α,β)
//! - Radau-left:  ω = (1 + x) P_{n-1}^(α,β+1)
//! - Radau-right: ω = (1 - x) P_{n-1}^(α+1,β)
//! - Lobatto:     ω = (1 - x²) P_{n-2}^(α+1,β+1)
//!
//! The interpolation matrix M[i,j] = h_j(t_i) transfers nodal data to a
//! second set of abscissas t.

use faer::Mat;

use crate::config::TOLERANCE;
use crate::error::{PolylibError, Result};
use crate::polynomial::{jacobi, jacobi_derivative};
use crate::types::{JacobiParams, PolyType};

/// Evaluate the `i`-th Lagrange shape function of `nodes` at `z`.
///
/// Returns exactly 1.0 when `z` is within `TOLERANCE` of node `i`. A single
/// node carries the constant shape function 1.
///
/// # Example
/// ```
/// use polylib::operators::lagrangian_interpolant;
/// use polylib::quadrature::quadrature;
/// use polylib::types::{JacobiParams, PolyType};
///
/// let params = JacobiParams::LEGENDRE;
/// let rule = quadrature(PolyType::GaussLobatto, 3, params).unwrap();
/// // h_0 at the middle node vanishes
/// let h = lagrangian_interpolant(PolyType::GaussLobatto, 0, 0.0, &rule.nodes, params).unwrap();
/// assert!(h.abs() < 1e-15);
/// ```
pub fn lagrangian_interpolant(
    poly_type: PolyType,
    i: usize,
    z: f64,
    nodes: &[f64],
    params: JacobiParams,
) -> Result<f64> {
    let np = nodes.len();
    if i >= np {
        return Err(PolylibError::NodeIndexOutOfRange { index: i, len: np });
    }

    let zi = nodes[i];
    let dz = z - zi;
    if dz.abs() < TOLERANCE || np == 1 {
        return Ok(1.0);
    }

    let h = match poly_type {
        PolyType::Gauss => jacobi(np, params, z)? / (jacobi_derivative(np, params, zi)? * dz),
        PolyType::GaussRadauLeft => {
            let q = params.shifted(0.0, 1.0);
            let dw = (1.0 + zi) * jacobi_derivative(np - 1, q, zi)? + jacobi(np - 1, q, zi)?;
            (1.0 + z) * jacobi(np - 1, q, z)? / (dw * dz)
        }
        PolyType::GaussRadauRight => {
            let q = params.shifted(1.0, 0.0);
            let dw = (1.0 - zi) * jacobi_derivative(np - 1, q, zi)? - jacobi(np - 1, q, zi)?;
            (1.0 - z) * jacobi(np - 1, q, z)? / (dw * dz)
        }
        PolyType::GaussLobatto => {
            let q = params.shifted(1.0, 1.0);
            let dw = (1.0 - zi * zi) * jacobi_derivative(np - 2, q, zi)?
                - 2.0 * zi * jacobi(np - 2, q, zi)?;
            (1.0 - z * z) * jacobi(np - 2, q, z)? / (dw * dz)
        }
    };

    Ok(h)
}

/// Build the m×n interpolation matrix from `nodes` (n) to `targets` (m).
///
/// Applying it to nodal values of a polynomial of degree < n reproduces the
/// polynomial at the targets.
pub fn interpolation_matrix(
    poly_type: PolyType,
    nodes: &[f64],
    targets: &[f64],
    params: JacobiParams,
) -> Result<Mat<f64>> {
    let mut im = Mat::zeros(targets.len(), nodes.len());
    interpolation_matrix_into(&mut im, nodes, targets, poly_type, params)?;
    Ok(im)
}

/// Fill the m×n matrix `im` with the interpolation operator.
pub fn interpolation_matrix_into(
    im: &mut Mat<f64>,
    nodes: &[f64],
    targets: &[f64],
    poly_type: PolyType,
    params: JacobiParams,
) -> Result<()> {
    if im.nrows() != targets.len() {
        return Err(PolylibError::dimension_mismatch(
            "interpolation rows",
            targets.len(),
            im.nrows(),
        ));
    }
    if im.ncols() != nodes.len() {
        return Err(PolylibError::dimension_mismatch(
            "interpolation columns",
            nodes.len(),
            im.ncols(),
        ));
    }

    for (i, &zp) in targets.iter().enumerate() {
        for j in 0..nodes.len() {
            im[(i, j)] = lagrangian_interpolant(poly_type, j, zp, nodes, params)?;
        }
    }
    Ok(())
}
