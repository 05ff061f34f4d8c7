//! Unified error type for the balanced-clustering engine.
//!
//! Mirrors the single-enum, `thiserror`-derived shape used across the
//! surrounding workspace: one variant per rejection class, `#[from]`
//! conversions where a lower layer's error composes naturally, and a
//! crate-local `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("input point set is empty")]
    EmptyInput,

    #[error("{n} points is fewer than k={k} clusters")]
    TooFewPoints { n: usize, k: usize },

    #[error("k must be at least 1")]
    ZeroClusters,

    #[error("points have ragged rows: expected dimension {expected}, row {row} has {found}")]
    RaggedRows {
        expected: usize,
        row: usize,
        found: usize,
    },

    #[error(
        "infeasible size bounds: k*L={kl} must be <= N={n} <= k*U={ku} (k={k}, l={l}, u={u})"
    )]
    InfeasibleBounds {
        n: usize,
        k: usize,
        l: usize,
        u: usize,
        kl: usize,
        ku: usize,
    },
}

pub type ClusterResult<T> = Result<T, ClusterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClusterError::TooFewPoints { n: 2, k: 5 };
        assert!(err.to_string().contains("fewer than k=5"));
    }

    #[test]
    fn test_infeasible_bounds_display() {
        let err = ClusterError::InfeasibleBounds {
            n: 5,
            k: 3,
            l: 2,
            u: 2,
            kl: 6,
            ku: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("k*L=6"));
        assert!(msg.contains("N=5"));
    }

    #[test]
    fn test_result_alias() {
        fn example() -> ClusterResult<i32> {
            Ok(7)
        }
        assert_eq!(example().unwrap(), 7);
    }
}
