//! Gauss-Jacobi rule.
//!
//! Nodes are the zeros of P_np^(α,β). With P' = d/dx P_np^(α,β):
//!
//! w_i = fac / (P'(z_i)² (1 - z_i²))
//! fac = 2^(α+β+1) Γ(α+np+1) Γ(β+np+1) / (Γ(np+1) Γ(α+β+np+1))

use crate::config::RootFinder;
use crate::error::Result;
use crate::polynomial::jacobi_polynomial_derivative;
use crate::roots::jacobi_zeros;
use crate::special::gamma_function;
use crate::types::JacobiParams;

pub(super) fn gauss(
    z: &mut [f64],
    w: &mut [f64],
    params: JacobiParams,
    finder: RootFinder,
) -> Result<()> {
    let np = z.len();
    let npf = np as f64;
    let apb = params.apb();

    jacobi_zeros(z, params, finder)?;
    jacobi_polynomial_derivative(z, w, np, params)?;

    let mut fac = 2f64.powf(apb + 1.0)
        * gamma_function(params.alpha + npf + 1.0)?
        * gamma_function(params.beta + npf + 1.0)?;
    fac /= gamma_function(npf + 1.0)? * gamma_function(apb + npf + 1.0)?;

    for (wi, &zi) in w.iter_mut().zip(z.iter()) {
        *wi = fac / (*wi * *wi * (1.0 - zi * zi));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legendre_gauss_4() {
        let mut z = [0.0; 4];
        let mut w = [0.0; 4];
        gauss(&mut z, &mut w, JacobiParams::LEGENDRE, RootFinder::default()).unwrap();

        let nodes = [-0.861_136_311_594_053, -0.339_981_043_584_856];
        let weights = [0.347_854_845_137_454, 0.652_145_154_862_546];
        for i in 0..2 {
            assert!((z[i] - nodes[i]).abs() < 1e-14);
            assert!((z[3 - i] + nodes[i]).abs() < 1e-14);
            assert!((w[i] - weights[i]).abs() < 1e-14);
            assert!((w[3 - i] - weights[i]).abs() < 1e-14);
        }
        assert!((w.iter().sum::<f64>() - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_single_point() {
        let mut z = [0.0];
        let mut w = [0.0];
        gauss(&mut z, &mut w, JacobiParams::LEGENDRE, RootFinder::default()).unwrap();
        assert!(z[0].abs() < 1e-15);
        assert!((w[0] - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_exactness_with_weight() {
        // ∫ (1-x)(1+x) x^2 dx = 4/15, exact for np >= 2
        let params = JacobiParams::new(1.0, 1.0);
        let mut z = [0.0; 3];
        let mut w = [0.0; 3];
        gauss(&mut z, &mut w, params, RootFinder::PolynomialDeflation).unwrap();
        let integral: f64 = z.iter().zip(w.iter()).map(|(&x, &wi)| wi * x * x).sum();
        assert!((integral - 4.0 / 15.0).abs() < 1e-14);
    }
}
