//! Unweighted shortest path (fewest edges) via breadth-first search

use std::collections::{HashMap, HashSet, VecDeque};

use super::WeightedGraph;

impl WeightedGraph {
    /// Shortest path by edge count from `start` to `end`, both endpoints
    /// included, in traversal order.
    ///
    /// Ties between equally short paths are broken by lexicographic
    /// neighbor order. Returns `Some(vec![start])` when the labels are
    /// equal (checked before label lookup) and `None` when no path exists
    /// or either label is unknown.
    #[tracing::instrument(skip(self), fields(start = %start, end = %end))]
    pub fn shortest_path_unweighted(&self, start: &str, end: &str) -> Option<Vec<String>> {
        if start == end {
            return Some(vec![start.to_string()]);
        }
        if !self.contains(start) || !self.contains(end) {
            return None;
        }

        let mut predecessors: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.adjacency[current].keys() {
                let neighbor = neighbor.as_str();
                if visited.insert(neighbor) {
                    predecessors.insert(neighbor, current);
                    // Stop the instant the end node is discovered
                    if neighbor == end {
                        return Some(reconstruct(start, end, &predecessors));
                    }
                    queue.push_back(neighbor);
                }
            }
        }

        None
    }
}

/// Walk predecessors from `end` back to `start`, then reverse
fn reconstruct(start: &str, end: &str, predecessors: &HashMap<&str, &str>) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut at = end;
    while at != start {
        at = predecessors[at];
        path.push(at.to_string());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests;
