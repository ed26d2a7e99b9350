//! Special functions needed for quadrature normalization constants.

mod gamma;

pub use gamma::{MAX_GAMMA_ARGUMENT, gamma_function};
