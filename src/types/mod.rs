//! Strongly-typed parameters shared by every routine.
//!
//! - [`JacobiParams`] carries the weight exponents (α, β) so they cannot be
//!   swapped at a call site.
//! - [`PolyType`] is the closed set of quadrature families.
//!
//! # Example
//!
//! ```
//! use polylib::types::{JacobiParams, PolyType};
//!
//! let legendre = JacobiParams::LEGENDRE;
//! assert_eq!(legendre.alpha, 0.0);
//!
//! // Radau-left rules place their interior nodes at zeros of P^(α, β+1)
//! let shifted = legendre.shifted(0.0, 1.0);
//! assert_eq!(shifted.beta, 1.0);
//!
//! assert!(PolyType::GaussLobatto.includes_left_endpoint());
//! assert!(!PolyType::Gauss.includes_right_endpoint());
//! ```

mod params;
mod poly_type;

pub use params::JacobiParams;
pub use poly_type::PolyType;
