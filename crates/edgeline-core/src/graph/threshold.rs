//! Minimax connecting threshold via a union-find sweep over sorted edges

use std::cmp::Ordering;
use std::collections::HashMap;

use super::WeightedGraph;

/// Disjoint-set forest with union by rank and path halving, over dense
/// indexes assigned per node label.
#[derive(Debug)]
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Union the sets holding `a` and `b`; false when already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

impl WeightedGraph {
    /// Smallest threshold at which `start` and `end` fall into the same
    /// connected component: the minimum over all connecting paths of the
    /// maximum edge weight on the path.
    ///
    /// Returns `Some(0.0)` when the labels are equal (checked before
    /// label lookup) and `None` when the nodes are not connected even
    /// using every edge.
    #[tracing::instrument(skip(self), fields(start = %start, end = %end))]
    pub fn smallest_connecting_threshold(&self, start: &str, end: &str) -> Option<f64> {
        if start == end {
            return Some(0.0);
        }

        let index: HashMap<&str, usize> = self
            .adjacency
            .keys()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();
        let (start_idx, end_idx) = match (index.get(start).copied(), index.get(end).copied()) {
            (Some(s), Some(e)) => (s, e),
            _ => return None,
        };

        // Symmetric storage lists every undirected edge twice; the
        // duplicate union is a no-op, so no dedup is needed.
        let mut edges: Vec<(f64, usize, usize)> = Vec::new();
        for (u, neighbors) in &self.adjacency {
            for (v, &weight) in neighbors {
                edges.push((weight, index[u.as_str()], index[v.as_str()]));
            }
        }
        edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let mut sets = DisjointSet::new(index.len());
        for (weight, u, v) in edges {
            if sets.union(u, v) && sets.find(start_idx) == sets.find(end_idx) {
                return Some(weight);
            }
        }

        None
    }
}
