//! The Lloyd-style balanced outer loop: build solver -> solve -> decode ->
//! recompute centers -> refresh costs -> warm-start solve -> repeat until
//! the assignment vector is a fixed point.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{ClusterOutcome, sse};
use crate::centroid::update_centers;
use crate::cost::{CostMatrix, build_cost_matrix};
use crate::error::ClusterResult;
use crate::init::{InitMethod, initialize};
use crate::simplex::Solver;
use crate::validate::{validate_bounds, validate_points};

fn run_balanced(
    points: &[Vec<f64>],
    k: usize,
    method: InitMethod,
    warm_start: bool,
    workers: usize,
    seed: u64,
    build: impl Fn(&CostMatrix) -> Solver,
) -> ClusterOutcome {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut assignments, mut centers) = initialize(points, k, method, &mut rng);

    let mut costs = build_cost_matrix(points, &centers, workers);
    let mut solver = build(&costs);
    solver.simplex();
    assignments = solver.assignments();

    loop {
        let prev = assignments.clone();
        centers = update_centers(points, k, &assignments, &mut rng);
        costs = build_cost_matrix(points, &centers, workers);
        if warm_start {
            solver.update_costs(&costs);
        } else {
            solver = build(&costs);
        }
        solver.simplex();
        assignments = solver.assignments();
        tracing::debug!(
            changed = assignments.iter().zip(prev.iter()).filter(|(a, b)| a != b).count(),
            "balanced outer loop iteration"
        );
        if assignments == prev {
            break;
        }
    }

    let sse_val = sse(points, &centers, &assignments);
    tracing::info!(sse = sse_val, "balanced outer loop converged");
    ClusterOutcome { assignments, centers, sse: sse_val }
}

/// Hard balance with the default bounds L = floor(N/k), U = ceil(N/k).
pub fn cluster_hard(
    points: &[Vec<f64>],
    k: usize,
    method: InitMethod,
    warm_start: bool,
    workers: usize,
    seed: u64,
) -> ClusterResult<ClusterOutcome> {
    validate_points(points, k)?;
    let n = points.len();
    let l = n / k;
    let u = n.div_ceil(k);
    cluster_hard_bounded(points, k, l, u, method, warm_start, workers, seed)
}

/// Hard balance with caller-supplied bounds; requires k*L <= N <= k*U.
#[allow(clippy::too_many_arguments)]
pub fn cluster_hard_bounded(
    points: &[Vec<f64>],
    k: usize,
    l: usize,
    u: usize,
    method: InitMethod,
    warm_start: bool,
    workers: usize,
    seed: u64,
) -> ClusterResult<ClusterOutcome> {
    validate_points(points, k)?;
    validate_bounds(points.len(), k, l, u)?;
    Ok(run_balanced(points, k, method, warm_start, workers, seed, |c| {
        Solver::build_hard(c, l, u)
    }))
}

/// Soft balance: `f(cluster_index, size)` is an additive, convex,
/// non-decreasing-in-size penalty with f(_, 0) = 0.
#[allow(clippy::too_many_arguments)]
pub fn cluster_soft(
    points: &[Vec<f64>],
    k: usize,
    f: impl Fn(usize, usize) -> f64 + Copy,
    method: InitMethod,
    warm_start: bool,
    workers: usize,
    seed: u64,
) -> ClusterResult<ClusterOutcome> {
    validate_points(points, k)?;
    Ok(run_balanced(points, k, method, warm_start, workers, seed, |c| {
        Solver::build_soft(c, f)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s1_trivial_hard() {
        let points = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
        let out = cluster_hard(&points, 2, InitMethod::Forgy, true, 1, 1).unwrap();
        let mut sizes = [0usize; 2];
        for &a in &out.assignments {
            sizes[a] += 1;
        }
        assert_eq!(sizes, [2, 2]);
        assert_eq!(out.assignments[0], out.assignments[1]);
        assert_eq!(out.assignments[2], out.assignments[3]);
        assert!((out.sse - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_s2_degenerate_k1() {
        let points = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        let out = cluster_hard(&points, 1, InitMethod::Forgy, true, 1, 0).unwrap();
        assert_eq!(out.assignments, vec![0, 0]);
        assert!((out.centers[0][0] - 1.5).abs() < 1e-9);
        assert!((out.centers[0][1] - 2.0).abs() < 1e-9);
        assert!((out.sse - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_s3_soft_lambda_zero_matches_unconstrained() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.5, 0.0],
            vec![10.0, 10.0],
            vec![10.5, 10.0],
        ];
        let f = |_j: usize, _x: usize| 0.0;
        let out = cluster_soft(&points, 2, f, InitMethod::Forgy, true, 1, 3).unwrap();
        // with no penalty, the two well-separated pairs must each land together.
        assert_eq!(out.assignments[0], out.assignments[1]);
        assert_eq!(out.assignments[2], out.assignments[3]);
        assert_ne!(out.assignments[0], out.assignments[2]);
    }

    #[test]
    fn test_s4_hard_vs_soft_huge_lambda() {
        let points = vec![
            vec![0.0],
            vec![0.1],
            vec![5.0],
            vec![5.1],
            vec![10.0],
            vec![10.1],
        ];
        let hard = cluster_hard(&points, 3, InitMethod::Forgy, true, 1, 11).unwrap();
        let lambda = 1e9;
        let f = move |_j: usize, x: usize| lambda * (x as f64).powi(2);
        let soft = cluster_soft(&points, 3, f, InitMethod::Forgy, true, 1, 11).unwrap();

        let mut hard_sizes = [0usize; 3];
        let mut soft_sizes = [0usize; 3];
        for &a in &hard.assignments {
            hard_sizes[a] += 1;
        }
        for &a in &soft.assignments {
            soft_sizes[a] += 1;
        }
        let mut hs = hard_sizes;
        let mut ss = soft_sizes;
        hs.sort();
        ss.sort();
        assert_eq!(hs, [2, 2, 2]);
        assert_eq!(ss, [2, 2, 2]);
        assert!((hard.sse - soft.sse).abs() < 1e-6);
    }

    #[test]
    fn test_s6_infeasible_bounds_rejected() {
        let points: Vec<Vec<f64>> = (0..5).map(|i| vec![i as f64]).collect();
        let result = cluster_hard_bounded(&points, 3, 2, 2, InitMethod::Forgy, true, 1, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_warm_start_equivalence() {
        let points = vec![
            vec![0.0],
            vec![1.0],
            vec![2.0],
            vec![10.0],
            vec![11.0],
            vec![12.0],
        ];
        let warm = cluster_hard(&points, 2, InitMethod::Forgy, true, 1, 99).unwrap();
        let cold = cluster_hard(&points, 2, InitMethod::Forgy, false, 1, 99).unwrap();
        assert_eq!(warm.assignments, cold.assignments);
        assert_eq!(warm.centers, cold.centers);
        assert!((warm.sse - cold.sse).abs() < 1e-9);
    }

    #[test]
    fn test_determinism_same_seed() {
        let points: Vec<Vec<f64>> = (0..12).map(|i| vec![(i % 4) as f64, (i / 4) as f64]).collect();
        let a = cluster_hard(&points, 3, InitMethod::RandomPartition, true, 1, 42).unwrap();
        let b = cluster_hard(&points, 3, InitMethod::RandomPartition, true, 1, 42).unwrap();
        assert_eq!(a.assignments, b.assignments);
        assert_eq!(a.centers, b.centers);
        assert_eq!(a.sse, b.sse);
    }

    #[test]
    fn test_sse_matches_independent_recomputation() {
        let points = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
        let out = cluster_hard(&points, 2, InitMethod::Forgy, true, 1, 2).unwrap();
        let recomputed = sse(&points, &out.centers, &out.assignments);
        assert!((out.sse - recomputed).abs() < 1e-9);
    }
}
