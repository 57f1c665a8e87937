//! Adjacency structure and structural accessors

use std::collections::BTreeMap;

/// In-memory undirected weighted graph keyed by text labels.
///
/// Built once from a sequence of edge triples and read-only afterwards.
/// Adjacency is an ordered map of maps, so node listing, neighbor
/// iteration, and therefore traversal tie-breaking are all lexicographic
/// and deterministic.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    pub(crate) adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl WeightedGraph {
    /// Build a graph from edge triples.
    ///
    /// Both directions are stored for every edge. When the same unordered
    /// pair appears more than once, the last weight wins for both
    /// directions. An empty input yields an empty graph.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (String, String, f64)>,
    {
        let mut adjacency: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (u, v, weight) in edges {
            adjacency
                .entry(u.clone())
                .or_default()
                .insert(v.clone(), weight);
            adjacency.entry(v).or_default().insert(u, weight);
        }
        Self { adjacency }
    }

    /// Number of distinct node labels
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// All node labels, in lexicographic order
    pub fn nodes(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// Number of distinct undirected edges.
    ///
    /// Every edge is stored in both directions, so this is the sum of
    /// degrees halved.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Weight of the edge between `u` and `v`, `None` when no such edge
    /// exists or either label is unknown
    pub fn edge_weight(&self, u: &str, v: &str) -> Option<f64> {
        self.adjacency.get(u).and_then(|n| n.get(v)).copied()
    }

    /// Degree of `u`, 0 when the label is unknown
    pub fn num_neighbors(&self, u: &str) -> usize {
        self.adjacency.get(u).map_or(0, BTreeMap::len)
    }

    /// Labels adjacent to `u` in lexicographic order, empty when the label
    /// is unknown
    pub fn neighbors(&self, u: &str) -> Vec<String> {
        self.adjacency
            .get(u)
            .map(|n| n.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `u` appears as an endpoint of at least one edge
    pub fn contains(&self, u: &str) -> bool {
        self.adjacency.contains_key(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(triples: &[(&str, &str, f64)]) -> Vec<(String, String, f64)> {
        triples
            .iter()
            .map(|(u, v, w)| (u.to_string(), v.to_string(), *w))
            .collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = WeightedGraph::from_edges(Vec::new());
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.nodes().is_empty());
    }

    #[test]
    fn test_counts_and_nodes() {
        let graph = WeightedGraph::from_edges(edges(&[("B", "A", 1.0), ("B", "C", 2.0)]));
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.nodes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_symmetric_storage() {
        let graph = WeightedGraph::from_edges(edges(&[("A", "B", 1.5)]));
        assert_eq!(graph.edge_weight("A", "B"), Some(1.5));
        assert_eq!(graph.edge_weight("B", "A"), Some(1.5));
    }

    #[test]
    fn test_sum_of_degrees_is_twice_edge_count() {
        let graph = WeightedGraph::from_edges(edges(&[
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("A", "C", 5.0),
            ("C", "D", 0.5),
        ]));
        let degree_sum: usize = graph.nodes().iter().map(|n| graph.num_neighbors(n)).sum();
        assert_eq!(graph.num_edges(), degree_sum / 2);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let graph = WeightedGraph::from_edges(edges(&[("A", "B", 1.0), ("B", "A", 9.0)]));
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.edge_weight("A", "B"), Some(9.0));
        assert_eq!(graph.edge_weight("B", "A"), Some(9.0));
    }

    #[test]
    fn test_missing_edge_and_unknown_node() {
        let graph = WeightedGraph::from_edges(edges(&[("A", "B", 1.0)]));
        assert_eq!(graph.edge_weight("A", "Z"), None);
        assert_eq!(graph.edge_weight("A", "A"), None);
        assert_eq!(graph.num_neighbors("Z"), 0);
        assert!(graph.neighbors("Z").is_empty());
    }

    #[test]
    fn test_self_loop_stored_as_own_neighbor() {
        let graph = WeightedGraph::from_edges(edges(&[("A", "A", 3.0)]));
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.edge_weight("A", "A"), Some(3.0));
        assert_eq!(graph.neighbors("A"), vec!["A"]);
    }

    #[test]
    fn test_neighbors_sorted() {
        let graph = WeightedGraph::from_edges(edges(&[
            ("M", "Z", 1.0),
            ("M", "A", 1.0),
            ("M", "K", 1.0),
        ]));
        assert_eq!(graph.neighbors("M"), vec!["A", "K", "Z"]);
    }
}
