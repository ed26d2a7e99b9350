//! Quadrature family selector.

use std::fmt;

/// The four Jacobi-family point sets.
///
/// The family decides which interval endpoints are forced into the node set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolyType {
    /// Zeros of P_n^(α,β); no endpoints.
    Gauss,
    /// x = -1 plus the zeros of P_{n-1}^(α,β+1).
    GaussRadauLeft,
    /// Zeros of P_{n-1}^(α+1,β) plus x = +1.
    GaussRadauRight,
    /// x = ±1 plus the zeros of P_{n-2}^(α+1,β+1).
    GaussLobatto,
}

impl PolyType {
    /// All variants, in declaration order.
    pub const ALL: [PolyType; 4] = [
        PolyType::Gauss,
        PolyType::GaussRadauLeft,
        PolyType::GaussRadauRight,
        PolyType::GaussLobatto,
    ];

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PolyType::Gauss => "Gauss",
            PolyType::GaussRadauLeft => "Gauss-Radau-left",
            PolyType::GaussRadauRight => "Gauss-Radau-right",
            PolyType::GaussLobatto => "Gauss-Lobatto",
        }
    }

    /// Whether x = -1 is a node (for more than one point).
    pub fn includes_left_endpoint(&self) -> bool {
        matches!(self, PolyType::GaussRadauLeft | PolyType::GaussLobatto)
    }

    /// Whether x = +1 is a node (for more than one point).
    pub fn includes_right_endpoint(&self) -> bool {
        matches!(self, PolyType::GaussRadauRight | PolyType::GaussLobatto)
    }

    /// Highest polynomial degree integrated exactly by an `np`-point rule.
    pub fn exactness_degree(&self, np: usize) -> usize {
        let fixed = match self {
            PolyType::Gauss => 0,
            PolyType::GaussRadauLeft | PolyType::GaussRadauRight => 1,
            PolyType::GaussLobatto => 2,
        };
        if np <= fixed {
            return np.saturating_sub(1);
        }
        2 * np - 1 - fixed
    }
}

impl fmt::Display for PolyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert!(!PolyType::Gauss.includes_left_endpoint());
        assert!(PolyType::GaussRadauLeft.includes_left_endpoint());
        assert!(!PolyType::GaussRadauLeft.includes_right_endpoint());
        assert!(PolyType::GaussRadauRight.includes_right_endpoint());
        assert!(PolyType::GaussLobatto.includes_left_endpoint());
        assert!(PolyType::GaussLobatto.includes_right_endpoint());
    }

    #[test]
    fn test_exactness_degree() {
        assert_eq!(PolyType::Gauss.exactness_degree(4), 7);
        assert_eq!(PolyType::GaussRadauLeft.exactness_degree(4), 6);
        assert_eq!(PolyType::GaussRadauRight.exactness_degree(4), 6);
        assert_eq!(PolyType::GaussLobatto.exactness_degree(4), 5);
        assert_eq!(PolyType::GaussLobatto.exactness_degree(2), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(PolyType::GaussLobatto.to_string(), "Gauss-Lobatto");
        assert_eq!(PolyType::ALL.len(), 4);
    }
}
