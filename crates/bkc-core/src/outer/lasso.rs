//! Exclusive-lasso balance: no network solver, just a per-point best-swap
//! coordinate-descent heuristic against the closed-form delta of moving
//! one point under a lambda * size^2 penalty.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{ClusterOutcome, sse};
use crate::centroid::update_centers;
use crate::distance::squared_euclidean;
use crate::error::ClusterResult;
use crate::init::{InitMethod, initialize};
use crate::validate::validate_points;

pub fn cluster_lasso(
    points: &[Vec<f64>],
    k: usize,
    lambda: f64,
    method: InitMethod,
    seed: u64,
) -> ClusterResult<ClusterOutcome> {
    validate_points(points, k)?;
    let n = points.len();
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut assignments, mut centers) = initialize(points, k, method, &mut rng);

    loop {
        let mut sizes = vec![0i64; k];
        for &a in &assignments {
            sizes[a] += 1;
        }

        let mut changed = false;
        for i in 0..n {
            let current = assignments[i];
            let mut best_j = current;
            let mut best_delta = 0.0f64;

            let size_cur = sizes[current] as f64;
            let base = -squared_euclidean(&points[i], &centers[current]) - lambda * size_cur * size_cur
                + lambda * (size_cur - 1.0) * (size_cur - 1.0);

            for j in 0..k {
                if j == current {
                    continue;
                }
                let size_j = sizes[j] as f64;
                let delta = base
                    + squared_euclidean(&points[i], &centers[j])
                    + lambda * (size_j + 1.0) * (size_j + 1.0)
                    - lambda * size_j * size_j;
                if delta < best_delta {
                    best_delta = delta;
                    best_j = j;
                }
            }

            if best_j != current {
                sizes[current] -= 1;
                sizes[best_j] += 1;
                assignments[i] = best_j;
                changed = true;
            }
        }

        if !changed {
            break;
        }
        centers = update_centers(points, k, &assignments, &mut rng);
        tracing::debug!("lasso outer loop pass completed with changes");
    }

    let sse_val = sse(points, &centers, &assignments);
    tracing::info!(sse = sse_val, "lasso outer loop converged");
    Ok(ClusterOutcome { assignments, centers, sse: sse_val })
}
