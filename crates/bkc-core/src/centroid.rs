//! Centroid recomputation with empty-cluster reseeding.

use rand::Rng;

/// Recomputes each center as the mean of its assigned points; an empty
/// cluster is reseeded from a uniformly-random row of `points`. This is
/// the only place this routine consults the rng.
pub fn update_centers(
    points: &[Vec<f64>],
    k: usize,
    assignments: &[usize],
    rng: &mut impl Rng,
) -> Vec<Vec<f64>> {
    let n = points.len();
    let s = points.first().map(|p| p.len()).unwrap_or(0);
    let mut sums = vec![vec![0.0f64; s]; k];
    let mut counts = vec![0usize; k];

    for (i, &j) in assignments.iter().enumerate() {
        counts[j] += 1;
        for d in 0..s {
            sums[j][d] += points[i][d];
        }
    }

    let mut centers = Vec::with_capacity(k);
    for j in 0..k {
        if counts[j] > 0 {
            let count = counts[j] as f64;
            centers.push(sums[j].iter().map(|v| v / count).collect());
        } else {
            let r = rng.gen_range(0..n);
            centers.push(points[r].clone());
        }
    }
    centers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mean_of_assigned_points() {
        let points = vec![vec![0.0, 0.0], vec![2.0, 0.0], vec![10.0, 10.0]];
        let assignments = vec![0, 0, 1];
        let mut rng = StdRng::seed_from_u64(1);
        let centers = update_centers(&points, 2, &assignments, &mut rng);
        assert_eq!(centers[0], vec![1.0, 0.0]);
        assert_eq!(centers[1], vec![10.0, 10.0]);
    }

    #[test]
    fn test_empty_cluster_reseeded() {
        let points = vec![vec![1.0], vec![2.0], vec![3.0]];
        let assignments = vec![0, 0, 0];
        let mut rng = StdRng::seed_from_u64(3);
        let centers = update_centers(&points, 2, &assignments, &mut rng);
        // cluster 1 is empty; its reseed must be one of the input rows.
        assert!(points.iter().any(|p| p == &centers[1]));
    }
}
