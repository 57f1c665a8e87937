//! Weighted shortest path via Dijkstra's algorithm

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use super::types::PathEdge;
use super::WeightedGraph;

/// Heap entry ordered by accumulated distance, used under `Reverse` as a
/// min-heap. Equal distances tie-break on the label so heap order is
/// deterministic.
#[derive(Debug, Clone)]
struct HeapEntry {
    label: String,
    distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.distance == other.distance
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl WeightedGraph {
    /// Minimum-total-weight path from `start` to `end` as a sequence of
    /// edges in traversal order.
    ///
    /// Returns `Some(vec![])` when the labels are equal (a zero-length
    /// path has no edges) and `None` when no path exists or either label
    /// is unknown. Weights are assumed non-negative; this is not
    /// validated.
    #[tracing::instrument(skip(self), fields(start = %start, end = %end))]
    pub fn shortest_path_weighted(&self, start: &str, end: &str) -> Option<Vec<PathEdge>> {
        if start == end {
            return Some(Vec::new());
        }
        if !self.contains(start) || !self.contains(end) {
            return None;
        }

        let mut best: HashMap<String, f64> = HashMap::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

        best.insert(start.to_string(), 0.0);
        heap.push(Reverse(HeapEntry {
            label: start.to_string(),
            distance: 0.0,
        }));

        while let Some(Reverse(HeapEntry { label, distance })) = heap.pop() {
            if label == end {
                break;
            }
            // Skip stale entries superseded by a later relaxation
            if best.get(&label).is_some_and(|&d| distance > d) {
                continue;
            }
            for (neighbor, &weight) in &self.adjacency[label.as_str()] {
                let alt = distance + weight;
                if best.get(neighbor).is_none_or(|&d| alt < d) {
                    best.insert(neighbor.clone(), alt);
                    predecessors.insert(neighbor.clone(), label.clone());
                    heap.push(Reverse(HeapEntry {
                        label: neighbor.clone(),
                        distance: alt,
                    }));
                }
            }
        }

        if !predecessors.contains_key(end) {
            return None;
        }
        Some(self.reconstruct(start, end, &predecessors))
    }

    /// Walk predecessors from `end` back to `start`, emitting edges, then
    /// reverse into traversal order
    fn reconstruct(
        &self,
        start: &str,
        end: &str,
        predecessors: &HashMap<String, String>,
    ) -> Vec<PathEdge> {
        let mut path = Vec::new();
        let mut at = end.to_string();
        while at != start {
            let prev = predecessors[at.as_str()].clone();
            // Every predecessor link is an edge the relaxation traversed
            let weight = self.adjacency[prev.as_str()][at.as_str()];
            path.push(PathEdge {
                from: prev.clone(),
                to: at,
                weight,
            });
            at = prev;
        }
        path.reverse();
        path
    }
}
