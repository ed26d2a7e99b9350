//! Gauss-Radau-Jacobi rules with one fixed endpoint.
//!
//! Left rule: z_0 = -1, the rest are zeros of P_{np-1}^(α,β+1).
//! Right rule: z_{np-1} = +1, the rest are zeros of P_{np-1}^(α+1,β).
//!
//! With q_i = P_{np-1}^(α,β)(z_i):
//!
//! left:  w_i = fac_l (1 - z_i) / q_i²,  w_0 scaled by (β + 1)
//! right: w_i = fac_r (1 + z_i) / q_i²,  w_{np-1} scaled by (α + 1)
//!
//! fac_l = 2^(α+β) Γ(α+np) Γ(β+np) / (Γ(np) (β+np) Γ(α+β+np+1))
//! fac_r = 2^(α+β) Γ(α+np) Γ(β+np) / (Γ(np) (α+np) Γ(α+β+np+1))

use crate::config::RootFinder;
use crate::error::Result;
use crate::polynomial::jacobi_polynomial;
use crate::roots::jacobi_zeros;
use crate::special::gamma_function;
use crate::types::JacobiParams;

/// Γ(α+np) Γ(β+np) 2^(α+β) / (Γ(np) Γ(α+β+np+1)), shared by both rules.
fn radau_scale(np: usize, params: JacobiParams) -> Result<f64> {
    let npf = np as f64;
    let apb = params.apb();
    let mut fac = 2f64.powf(apb)
        * gamma_function(params.alpha + npf)?
        * gamma_function(params.beta + npf)?;
    fac /= gamma_function(npf)? * gamma_function(apb + npf + 1.0)?;
    Ok(fac)
}

pub(super) fn radau_left(
    z: &mut [f64],
    w: &mut [f64],
    params: JacobiParams,
    finder: RootFinder,
) -> Result<()> {
    let np = z.len();
    if np == 1 {
        z[0] = 0.0;
        w[0] = 2.0;
        return Ok(());
    }

    z[0] = -1.0;
    jacobi_zeros(&mut z[1..], params.shifted(0.0, 1.0), finder)?;
    jacobi_polynomial(z, w, None, np - 1, params)?;

    let fac = radau_scale(np, params)? / (params.beta + np as f64);
    for (wi, &zi) in w.iter_mut().zip(z.iter()) {
        *wi = fac * (1.0 - zi) / (*wi * *wi);
    }
    w[0] *= params.beta + 1.0;

    Ok(())
}

pub(super) fn radau_right(
    z: &mut [f64],
    w: &mut [f64],
    params: JacobiParams,
    finder: RootFinder,
) -> Result<()> {
    let np = z.len();
    if np == 1 {
        z[0] = 0.0;
        w[0] = 2.0;
        return Ok(());
    }

    jacobi_zeros(&mut z[..np - 1], params.shifted(1.0, 0.0), finder)?;
    z[np - 1] = 1.0;
    jacobi_polynomial(z, w, None, np - 1, params)?;

    let fac = radau_scale(np, params)? / (params.alpha + np as f64);
    for (wi, &zi) in w.iter_mut().zip(z.iter()) {
        *wi = fac * (1.0 + zi) / (*wi * *wi);
    }
    w[np - 1] *= params.alpha + 1.0;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_left() {
        // Legendre: nodes {-1, 1/3}, weights {1/2, 3/2}
        let mut z = [0.0; 2];
        let mut w = [0.0; 2];
        radau_left(&mut z, &mut w, JacobiParams::LEGENDRE, RootFinder::default()).unwrap();
        assert_eq!(z[0], -1.0);
        assert!((z[1] - 1.0 / 3.0).abs() < 1e-15);
        assert!((w[0] - 0.5).abs() < 1e-15);
        assert!((w[1] - 1.5).abs() < 1e-15);
    }

    #[test]
    fn test_left_right_mirror() {
        // Right rule with (α, β) mirrors the left rule with (β, α)
        let left_params = JacobiParams::new(0.5, 2.0);
        let right_params = JacobiParams::new(2.0, 0.5);
        let np = 7;
        let (mut zl, mut wl) = ([0.0; 7], [0.0; 7]);
        let (mut zr, mut wr) = ([0.0; 7], [0.0; 7]);
        radau_left(&mut zl, &mut wl, left_params, RootFinder::default()).unwrap();
        radau_right(&mut zr, &mut wr, right_params, RootFinder::default()).unwrap();
        for i in 0..np {
            assert!((zl[i] + zr[np - 1 - i]).abs() < 1e-14);
            assert!((wl[i] - wr[np - 1 - i]).abs() < 1e-13);
        }
        assert_eq!(zr[np - 1], 1.0);
    }

    #[test]
    fn test_exactness() {
        // 5-point Radau is exact to degree 8
        let mut z = [0.0; 5];
        let mut w = [0.0; 5];
        radau_right(&mut z, &mut w, JacobiParams::LEGENDRE, RootFinder::default()).unwrap();
        for k in 0..=8 {
            let exact = if k % 2 == 0 { 2.0 / (k + 1) as f64 } else { 0.0 };
            let numerical: f64 = z
                .iter()
                .zip(w.iter())
                .map(|(&x, &wi)| wi * x.powi(k))
                .sum();
            assert!((numerical - exact).abs() < 1e-13, "degree {k}");
        }
    }
}
