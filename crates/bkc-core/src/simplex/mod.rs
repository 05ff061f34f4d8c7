//! Primal network-simplex solver over the point/cluster transportation graph.
//!
//! One [`Solver`] struct serves both the hard and soft sink-arc variants;
//! they differ only in how the sink arcs are built (see `build.rs`), not in
//! a trait object or an enum-per-variant split.

mod build;
mod pivot;

/// Tolerance on reduced cost below which an arc is considered a pivot
/// candidate. Shields the pricing loop from floating-point noise.
const EPS: f64 = 1e-6;

#[derive(Debug, Clone)]
pub(crate) struct Arc {
    pub from: usize,
    pub to: usize,
    pub cap: i64,
    pub flow: i64,
    pub cost: f64,
    pub in_tree: bool,
}

/// Vertex 0 is the source; vertices `1..=n` are point nodes; vertices
/// `n+1..=n+k` are cluster nodes.
pub struct Solver {
    pub(crate) n: usize,
    pub(crate) k: usize,
    v: usize,
    pub(crate) arcs: Vec<Arc>,
    parent: Vec<usize>,
    parent_edge: Vec<usize>,
    parent_dir: Vec<i8>,
    potential: Vec<f64>,
    potential_tag: Vec<u64>,
    tag: u64,
    lca_mark: Vec<u64>,
    lca_tag: u64,
    min_cost: f64,
    cursor: usize,
}

impl Solver {
    fn from_arcs(n: usize, k: usize, arcs: Vec<Arc>) -> Solver {
        let v = n + k + 1;
        let mut solver = Solver {
            n,
            k,
            v,
            arcs,
            parent: vec![0; v],
            parent_edge: vec![0; v],
            parent_dir: vec![1; v],
            potential: vec![0.0; v],
            potential_tag: vec![0; v],
            tag: 1,
            lca_mark: vec![0; v],
            lca_tag: 0,
            min_cost: 0.0,
            cursor: 0,
        };
        solver.build_tree();
        solver
    }

    /// Number of vertices in the transportation graph (N + k + 1).
    pub fn vertex_count(&self) -> usize {
        self.v
    }

    pub fn min_cost(&self) -> f64 {
        self.min_cost
    }

    /// Cyclic-pricing loop: scan arcs for a negative reduced cost, pivot,
    /// restart the scan counter (not the cursor). Terminates once a full
    /// revolution finds no candidate. No explicit anti-cycling rule is
    /// applied beyond the restart-on-pivot discipline; this is a known,
    /// accepted theoretical gap rather than a defect.
    pub fn simplex(&mut self) {
        let total = self.arcs.len();
        if total == 0 {
            return;
        }
        let mut since_last_pivot = 0usize;
        while since_last_pivot < total {
            let idx = self.cursor;
            self.cursor = (self.cursor + 1) % total;
            since_last_pivot += 1;

            let (in_tree, cap, flow, from, to, cost) = {
                let arc = &self.arcs[idx];
                (arc.in_tree, arc.cap, arc.flow, arc.from, arc.to, arc.cost)
            };
            if in_tree || cap <= 0 {
                continue;
            }
            let direction: i8 = if flow == 0 { 1 } else { -1 };
            let pi_from = self.potential(from);
            let pi_to = self.potential(to);
            let delta = (pi_to - pi_from + cost) * direction as f64;
            if delta < -EPS {
                self.pivot(idx, direction, delta);
                since_last_pivot = 0;
            }
        }
    }

    /// Edits point-arc costs in place for a warm restart: flows and the
    /// spanning tree are untouched, only costs and the potential tag
    /// change. Uses the solver's own stored `n`/`k`, never a shape
    /// recomputed from `costs`, to identify which arcs are point arcs.
    pub fn update_costs(&mut self, costs: &crate::cost::CostMatrix) {
        debug_assert_eq!(costs.n(), self.n, "update_costs: N mismatch with solver");
        debug_assert_eq!(costs.k(), self.k, "update_costs: k mismatch with solver");
        for i in 0..self.n {
            for j in 0..self.k {
                let idx = i * self.k + j;
                let new_cost = costs.get(i, j);
                let arc = &mut self.arcs[idx];
                if arc.flow != 0 {
                    self.min_cost += (new_cost - arc.cost) * arc.flow as f64;
                }
                arc.cost = new_cost;
            }
        }
        self.bump_tag();
    }

    /// Decodes the primal solution: A[i] = j where arc(p_i, c_j) carries
    /// flow 1. Every point has exactly one saturated outgoing arc.
    pub fn assignments(&self) -> Vec<usize> {
        let mut out = vec![0usize; self.n];
        for i in 0..self.n {
            for j in 0..self.k {
                if self.arcs[i * self.k + j].flow == 1 {
                    out[i] = j;
                    break;
                }
            }
        }
        out
    }

    pub(crate) fn bump_tag(&mut self) {
        self.tag += 1;
        self.potential[0] = 0.0;
        self.potential_tag[0] = self.tag;
    }
}
