//! Edgeline Core Library
//!
//! In-memory undirected weighted graph engine: edge-list loading,
//! structural queries, shortest paths, and threshold connectivity.

pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;

pub use graph::{PathEdge, WeightedGraph};
