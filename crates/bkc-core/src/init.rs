//! Seeding strategies: Forgy and Random-Partition.

use rand::Rng;

use crate::centroid::update_centers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMethod {
    Forgy,
    RandomPartition,
}

/// Produces an initial assignment vector and center matrix.
///
/// Both methods start from a uniform-random assignment (needed so
/// Random-Partition has something to average, and so Forgy still leaves
/// `A` well-defined before the solver overwrites it).
pub fn initialize(
    points: &[Vec<f64>],
    k: usize,
    method: InitMethod,
    rng: &mut impl Rng,
) -> (Vec<usize>, Vec<Vec<f64>>) {
    let n = points.len();
    let mut assignments: Vec<usize> = (0..n).map(|_| rng.gen_range(0..k)).collect();

    match method {
        InitMethod::Forgy => {
            let centers = forgy_centers(points, k, rng);
            (assignments, centers)
        }
        InitMethod::RandomPartition => {
            let centers = update_centers(points, k, &assignments, rng);
            (assignments, centers)
        }
    }
}

/// Partial Fisher-Yates shuffle drawing k distinct row indices.
fn forgy_centers(points: &[Vec<f64>], k: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
    }
    indices[..k].iter().map(|&idx| points[idx].clone()).collect()
}
