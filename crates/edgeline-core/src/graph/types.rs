//! Shared types for graph query results

use serde::Serialize;

/// One edge on a weighted path: endpoints in traversal order plus weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl PathEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}
