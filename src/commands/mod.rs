//! Command implementations for the edgeline CLI

pub mod components;
pub mod dispatch;
pub mod info;
pub mod neighbors;
pub mod path;
pub mod threshold;

use std::path::Path;
use std::time::Instant;

use edgeline_core::error::Result;
use edgeline_core::{loader, WeightedGraph};

use crate::cli::Cli;

/// Load an edge list and build the graph, reporting timing when verbose
fn load_graph(cli: &Cli, file: &Path, start: Instant) -> Result<WeightedGraph> {
    let records = loader::load_edge_list(file)?;
    let graph = WeightedGraph::from_edges(records);

    if cli.verbose {
        tracing::debug!(
            elapsed = ?start.elapsed(),
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "load_graph"
        );
    }

    Ok(graph)
}
