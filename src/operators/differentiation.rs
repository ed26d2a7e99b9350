//! Collocation differentiation matrices.
//!
//! The differentiation matrix D maps nodal values to derivative values:
//! (du/dx)_i = Σ_j D[i,j] * u_j
//!
//! For nodes z_0..z_{n-1} that are the zeros of some ω(x) = c Π (x - z_k),
//! the Lagrange form gives, for i != j,
//!
//! D[i,j] = ω'(z_i) / (ω'(z_j) (z_i - z_j))
//!
//! Only ratios of ω' appear, so each family uses a convenient multiple of
//! ω'(z_k) (called `pd` below) with closed forms at the fixed endpoints. The
//! diagonal comes from the ODE satisfied by the Jacobi polynomials.

use faer::Mat;

use crate::config::MAX_POINTS;
use crate::error::{PolylibError, Result};
use crate::polynomial::jacobi_polynomial_derivative;
use crate::special::gamma_function;
use crate::types::{JacobiParams, PolyType};

/// Compute the n×n differentiation matrix for the nodes `z`.
///
/// `z` must be the nodes of the `poly_type` rule with the same `params`
/// (as returned by [`crate::quadrature::quadrature`]). An empty node set
/// yields a 1×1 zero matrix.
pub fn derivative_matrix(poly_type: PolyType, z: &[f64], params: JacobiParams) -> Result<Mat<f64>> {
    let n = z.len().max(1);
    let mut d = Mat::zeros(n, n);
    derivative_matrix_into(&mut d, z, poly_type, params)?;
    Ok(d)
}

/// Fill `d` with the differentiation matrix for the nodes `z`.
///
/// `d` must be n×n, or 1×1 when `z` is empty.
pub fn derivative_matrix_into(
    d: &mut Mat<f64>,
    z: &[f64],
    poly_type: PolyType,
    params: JacobiParams,
) -> Result<()> {
    let np = z.len();
    let dim = np.max(1);
    if d.nrows() != dim || d.ncols() != dim {
        return Err(PolylibError::dimension_mismatch(
            "differentiation matrix",
            dim,
            if d.nrows() != dim { d.nrows() } else { d.ncols() },
        ));
    }
    if np > MAX_POINTS {
        return Err(PolylibError::TooManyPoints {
            requested: np,
            max: MAX_POINTS,
        });
    }

    // A single node only carries constants
    if np <= 1 {
        d[(0, 0)] = 0.0;
        return Ok(());
    }

    let mut scratch = [0.0; MAX_POINTS];
    let pd = &mut scratch[..np];
    let (alpha, beta) = (params.alpha, params.beta);
    let npf = np as f64;

    match poly_type {
        PolyType::Gauss => {
            jacobi_polynomial_derivative(z, pd, np, params)?;
            assemble(d, z, pd, |_, zi| {
                (alpha - beta + (alpha + beta + 2.0) * zi) / (2.0 * (1.0 - zi * zi))
            });
        }
        PolyType::GaussRadauLeft => {
            pd[0] = sign(np - 1) * gamma_function(npf + beta + 1.0)?
                / (gamma_function(npf)? * gamma_function(beta + 2.0)?);
            jacobi_polynomial_derivative(&z[1..], &mut pd[1..], np - 1, params.shifted(0.0, 1.0))?;
            for (p, &zi) in pd[1..].iter_mut().zip(&z[1..]) {
                *p *= 1.0 + zi;
            }
            assemble(d, z, pd, |i, zi| {
                if i == 0 {
                    -(npf + alpha + beta + 1.0) * (npf - 1.0) / (2.0 * (beta + 2.0))
                } else {
                    (alpha - beta + 1.0 + (alpha + beta + 1.0) * zi) / (2.0 * (1.0 - zi * zi))
                }
            });
        }
        PolyType::GaussRadauRight => {
            jacobi_polynomial_derivative(
                &z[..np - 1],
                &mut pd[..np - 1],
                np - 1,
                params.shifted(1.0, 0.0),
            )?;
            for (p, &zi) in pd[..np - 1].iter_mut().zip(&z[..np - 1]) {
                *p *= 1.0 - zi;
            }
            pd[np - 1] = -gamma_function(npf + alpha + 1.0)?
                / (gamma_function(npf)? * gamma_function(alpha + 2.0)?);
            assemble(d, z, pd, |i, zi| {
                if i == np - 1 {
                    (npf + alpha + beta + 1.0) * (npf - 1.0) / (2.0 * (alpha + 2.0))
                } else {
                    (alpha - beta - 1.0 + (alpha + beta + 1.0) * zi) / (2.0 * (1.0 - zi * zi))
                }
            });
        }
        PolyType::GaussLobatto => {
            pd[0] = 2.0 * sign(np) * gamma_function(npf + beta)?
                / (gamma_function(npf - 1.0)? * gamma_function(beta + 2.0)?);
            jacobi_polynomial_derivative(
                &z[1..np - 1],
                &mut pd[1..np - 1],
                np - 2,
                params.shifted(1.0, 1.0),
            )?;
            for (p, &zi) in pd[1..np - 1].iter_mut().zip(&z[1..np - 1]) {
                *p *= 1.0 - zi * zi;
            }
            pd[np - 1] = -2.0 * gamma_function(npf + alpha)?
                / (gamma_function(npf - 1.0)? * gamma_function(alpha + 2.0)?);
            assemble(d, z, pd, |i, zi| {
                if i == 0 {
                    (alpha - (npf - 1.0) * (npf + alpha + beta)) / (2.0 * (beta + 2.0))
                } else if i == np - 1 {
                    -(beta - (npf - 1.0) * (npf + alpha + beta)) / (2.0 * (alpha + 2.0))
                } else {
                    (alpha - beta + (alpha + beta) * zi) / (2.0 * (1.0 - zi * zi))
                }
            });
        }
    }

    Ok(())
}

/// (-1)^k
#[inline]
fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

/// Fill off-diagonals from the `pd` ratios and the diagonal from `diag(i, z_i)`.
fn assemble<F>(d: &mut Mat<f64>, z: &[f64], pd: &[f64], diag: F)
where
    F: Fn(usize, f64) -> f64,
{
    let np = z.len();
    for i in 0..np {
        for j in 0..i {
            d[(j, i)] = pd[j] / (pd[i] * (z[j] - z[i]));
            d[(i, j)] = pd[i] / (pd[j] * (z[i] - z[j]));
        }
        d[(i, i)] = diag(i, z[i]);
    }
}
