//! The N×k cost matrix and its builder.

use crate::distance::squared_euclidean;

/// Flat row-major N×k matrix of squared distances from points to centers.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    n: usize,
    k: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.k + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.k..(i + 1) * self.k]
    }
}

/// Builds C[i,j] = dist(X[i], M[j]).
///
/// `workers <= 1` runs sequentially. `workers > 1` computes rows in
/// parallel via rayon: each row is a pure function of (X[i], M), so
/// row-partitioned parallelism gives the same disjoint-writes /
/// determinism guarantee as a literal flat-index cyclic stripe, using
/// the idiomatic work-stealing scheduler instead of hand-rolled thread
/// spawning. Requires the `parallel` feature; otherwise always sequential.
pub fn build_cost_matrix(points: &[Vec<f64>], centers: &[Vec<f64>], workers: usize) -> CostMatrix {
    let n = points.len();
    let k = centers.len();
    let mut data = vec![0.0f64; n * k];

    #[cfg(feature = "parallel")]
    {
        if workers > 1 {
            use rayon::prelude::*;
            data.par_chunks_mut(k).enumerate().for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = squared_euclidean(&points[i], &centers[j]);
                }
            });
            return CostMatrix { n, k, data };
        }
    }
    let _ = workers;
    for i in 0..n {
        for j in 0..k {
            data[i * k + j] = squared_euclidean(&points[i], &centers[j]);
        }
    }
    CostMatrix { n, k, data }
}
