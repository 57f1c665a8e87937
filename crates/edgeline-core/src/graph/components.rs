//! Threshold-filtered connected components

use std::collections::{HashSet, VecDeque};

use super::WeightedGraph;

impl WeightedGraph {
    /// Partition all nodes into groups connected by paths whose every edge
    /// has weight at or below `threshold`.
    ///
    /// Every node appears in exactly one group; nodes with no qualifying
    /// edges form singleton groups. Groups and their members are in
    /// lexicographic discovery order, so the result is deterministic for
    /// a fixed graph.
    #[tracing::instrument(skip(self), fields(threshold = %threshold))]
    pub fn connected_components(&self, threshold: f64) -> Vec<Vec<String>> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut components = Vec::new();

        for node in self.adjacency.keys() {
            if !visited.insert(node.as_str()) {
                continue;
            }
            let mut component = Vec::new();
            let mut queue: VecDeque<&str> = VecDeque::new();
            queue.push_back(node.as_str());

            while let Some(current) = queue.pop_front() {
                component.push(current.to_string());
                for (neighbor, &weight) in &self.adjacency[current] {
                    if weight <= threshold && visited.insert(neighbor.as_str()) {
                        queue.push_back(neighbor);
                    }
                }
            }
            components.push(component);
        }

        components
    }
}
