//! Gauss-Lobatto-Jacobi rule.
//!
//! z_0 = -1, z_{np-1} = +1, interior nodes are the zeros of
//! P_{np-2}^(α+1,β+1). With q_i = P_{np-1}^(α,β)(z_i):
//!
//! w_i = fac / q_i²,  w_0 scaled by (β + 1), w_{np-1} by (α + 1)
//! fac = 2^(α+β+1) Γ(α+np) Γ(β+np) / ((np-1) Γ(np) Γ(α+β+np+1))
//!
//! For the Legendre weight this is the familiar
//! w_j = 2 / (N(N+1) P_N(z_j)²) with N = np - 1.

use crate::config::RootFinder;
use crate::error::Result;
use crate::polynomial::jacobi_polynomial;
use crate::roots::jacobi_zeros;
use crate::special::gamma_function;
use crate::types::JacobiParams;

pub(super) fn lobatto(
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
    z[np - 1] = 1.0;
    jacobi_zeros(&mut z[1..np - 1], params.shifted(1.0, 1.0), finder)?;
    jacobi_polynomial(z, w, None, np - 1, params)?;

    let npf = np as f64;
    let apb = params.apb();
    let mut fac = 2f64.powf(apb + 1.0)
        * gamma_function(params.alpha + npf)?
        * gamma_function(params.beta + npf)?;
    fac /= (npf - 1.0) * gamma_function(npf)? * gamma_function(apb + npf + 1.0)?;

    for wi in w.iter_mut() {
        *wi = fac / (*wi * *wi);
    }
    w[0] *= params.beta + 1.0;
    w[np - 1] *= params.alpha + 1.0;

    Ok(())
}
