//! Graph engine: adjacency structure and path/connectivity algorithms
//!
//! Provides the `WeightedGraph` structure and its query operations:
//! - BFS shortest path (fewest edges)
//! - Dijkstra shortest path (minimum total weight)
//! - Threshold-filtered connected components
//! - Minimax connecting threshold via a union-find edge sweep

mod bfs;
mod components;
mod dijkstra;
mod threshold;
pub mod types;
mod weighted;

pub use types::PathEdge;
pub use weighted::WeightedGraph;
