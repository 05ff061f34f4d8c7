//! Boundary validation shared by every entry point. The solver internals
//! assume already-validated input; this is the only place that checks it.

use crate::error::{ClusterError, ClusterResult};

/// Confirms `points` is non-empty, rectangular, and has at least `k`
/// rows; `k` is at least 1. Returns the (uniform) point dimension.
pub(crate) fn validate_points(points: &[Vec<f64>], k: usize) -> ClusterResult<usize> {
    if k == 0 {
        return Err(ClusterError::ZeroClusters);
    }
    let Some(first) = points.first() else {
        return Err(ClusterError::EmptyInput);
    };
    let dim = first.len();
    for (row, p) in points.iter().enumerate() {
        if p.len() != dim {
            return Err(ClusterError::RaggedRows {
                expected: dim,
                row,
                found: p.len(),
            });
        }
    }
    if points.len() < k {
        return Err(ClusterError::TooFewPoints { n: points.len(), k });
    }
    Ok(dim)
}

/// Validates hard-balance bounds: k*L <= N <= k*U.
pub(crate) fn validate_bounds(n: usize, k: usize, l: usize, u: usize) -> ClusterResult<()> {
    let kl = k * l;
    let ku = k * u;
    if kl > n || ku < n {
        return Err(ClusterError::InfeasibleBounds { n, k, l, u, kl, ku });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        let points: Vec<Vec<f64>> = vec![];
        assert!(matches!(validate_points(&points, 2), Err(ClusterError::EmptyInput)));
    }

    #[test]
    fn test_rejects_zero_k() {
        let points = vec![vec![1.0]];
        assert!(matches!(validate_points(&points, 0), Err(ClusterError::ZeroClusters)));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let points = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(
            validate_points(&points, 1),
            Err(ClusterError::RaggedRows { .. })
        ));
    }

    #[test]
    fn test_rejects_too_few_points() {
        let points = vec![vec![1.0], vec![2.0]];
        assert!(matches!(
            validate_points(&points, 5),
            Err(ClusterError::TooFewPoints { n: 2, k: 5 })
        ));
    }

    #[test]
    fn test_infeasible_bounds_s6() {
        // S6: N=5, k=3, L=2, U=2 => k*L=6 > N.
        assert!(validate_bounds(5, 3, 2, 2).is_err());
    }

    #[test]
    fn test_feasible_bounds_accepted() {
        assert!(validate_bounds(6, 3, 2, 2).is_ok());
    }
}
