//! Lazy node potentials, LCA, and the pivot operation.

use super::Solver;

/// Residual capacity an arc can absorb if pushed `dir` units further in
/// `dir` (+1 = toward upper bound, -1 = toward lower bound / zero).
fn residual(cap: i64, flow: i64, dir: i8) -> i64 {
    if dir > 0 { cap - flow } else { flow }
}

impl Solver {
    /// Lazily recomputes pi[u] against the current tag, walking up the
    /// tree only as far as necessary.
    pub(crate) fn potential(&mut self, u: usize) -> f64 {
        if self.potential_tag[u] == self.tag {
            return self.potential[u];
        }
        let parent = self.parent[u];
        let pi_parent = self.potential(parent);
        let dir = self.parent_dir[u] as f64;
        let cost = self.arcs[self.parent_edge[u]].cost;
        let pi_u = pi_parent + dir * cost;
        self.potential[u] = pi_u;
        self.potential_tag[u] = self.tag;
        pi_u
    }

    /// Least common ancestor of `u` and `v` in the rooted basis tree,
    /// found by marking u's root path then walking v up until a marked
    /// vertex is hit. Uses a generation-tagged scratch array so repeated
    /// calls don't need an O(V) clear.
    fn find_lca(&mut self, u: usize, v: usize) -> usize {
        self.lca_tag += 1;
        let mut x = u;
        loop {
            self.lca_mark[x] = self.lca_tag;
            if x == 0 {
                break;
            }
            x = self.parent[x];
        }
        let mut y = v;
        loop {
            if self.lca_mark[y] == self.lca_tag {
                return y;
            }
            y = self.parent[y];
        }
    }

    /// Closes the cycle formed by entering arc `arcs[enter_idx]` with
    /// orientation `d` (direction already folded into `reduced_cost`).
    pub(crate) fn pivot(&mut self, enter_idx: usize, d: i8, reduced_cost: f64) {
        let (a, b, e_cap) = {
            let e = &self.arcs[enter_idx];
            (e.from, e.to, e.cap)
        };
        let lca = self.find_lca(a, b);

        let mut theta = e_cap;
        // +1: binds on the a-side walk, -1: binds on the b-side walk, 0: entering arc's own cap binds.
        let mut min_dir: i8 = 0;
        let mut leaving_vertex = 0usize;

        let mut u = a;
        while u != lca {
            let edge_dir = -d * self.parent_dir[u];
            let edge = &self.arcs[self.parent_edge[u]];
            let r = residual(edge.cap, edge.flow, edge_dir);
            if r < theta {
                theta = r;
                min_dir = 1;
                leaving_vertex = u;
            }
            u = self.parent[u];
        }

        let mut w = b;
        while w != lca {
            let edge_dir = d * self.parent_dir[w];
            let edge = &self.arcs[self.parent_edge[w]];
            let r = residual(edge.cap, edge.flow, edge_dir);
            if r < theta {
                theta = r;
                min_dir = -1;
                leaving_vertex = w;
            }
            w = self.parent[w];
        }

        if theta > 0 {
            self.arcs[enter_idx].flow += d as i64 * theta;

            let mut u = a;
            while u != lca {
                let edge_dir = -d * self.parent_dir[u];
                let pe = self.parent_edge[u];
                self.arcs[pe].flow += edge_dir as i64 * theta;
                u = self.parent[u];
            }
            let mut w = b;
            while w != lca {
                let edge_dir = d * self.parent_dir[w];
                let pe = self.parent_edge[w];
                self.arcs[pe].flow += edge_dir as i64 * theta;
                w = self.parent[w];
            }

            self.min_cost += theta as f64 * reduced_cost;
        }

        if min_dir != 0 {
            self.reroute(enter_idx, a, b, min_dir, leaving_vertex);
            self.bump_tag();
        }
    }

    /// `min_dir` tells us which side (a or b) the leaving arc sits on.
    /// Reverses the parent-pointer chain from that side's endpoint up to
    /// the leaving vertex (inclusive), then grafts that endpoint onto the
    /// other side via the entering arc.
    fn reroute(&mut self, enter_idx: usize, a: usize, b: usize, min_dir: i8, leaving_vertex: usize) {
        let (base, other) = if min_dir == 1 { (a, b) } else { (b, a) };

        let mut chain = Vec::new();
        let mut u = base;
        loop {
            chain.push((u, self.parent_edge[u], self.parent_dir[u]));
            if u == leaving_vertex {
                break;
            }
            u = self.parent[u];
        }

        for i in 1..chain.len() {
            let (u_i, _, _) = chain[i];
            let (u_prev, prev_edge, prev_dir) = chain[i - 1];
            self.parent[u_i] = u_prev;
            self.parent_edge[u_i] = prev_edge;
            self.parent_dir[u_i] = -prev_dir;
        }

        let leaving_edge = chain.last().unwrap().1;
        self.arcs[leaving_edge].in_tree = false;

        self.parent[base] = other;
        self.parent_edge[base] = enter_idx;
        self.parent_dir[base] = if base == self.arcs[enter_idx].from { 1 } else { -1 };
        self.arcs[enter_idx].in_tree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::build_cost_matrix;

    #[test]
    fn test_lca_of_siblings_is_common_ancestor() {
        let points = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
        let centers = vec![vec![0.0], vec![10.0]];
        let costs = build_cost_matrix(&points, &centers, 1);
        let mut solver = Solver::build_hard(&costs, 1, 3);
        // point node 1 (index 0, vertex id 1) and point node 3 (vertex id 3)
        // both ultimately reach the source.
        let lca = solver.find_lca(1, 3);
        assert_eq!(lca, 0);
    }
}
