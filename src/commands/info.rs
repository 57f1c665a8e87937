//! Info command: structural summary of an edge list

use std::path::Path;
use std::time::Instant;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use edgeline_core::error::Result;

pub fn execute(cli: &Cli, file: &Path, list_nodes: bool, start: Instant) -> Result<()> {
    let graph = super::load_graph(cli, file, start)?;

    match cli.format {
        OutputFormat::Json => {
            let mut summary = json!({
                "file": file.display().to_string(),
                "nodes": graph.num_nodes(),
                "edges": graph.num_edges(),
            });
            if list_nodes {
                summary["node_labels"] = json!(graph.nodes());
            }
            println!("{}", summary);
        }
        OutputFormat::Human => {
            println!("{} nodes, {} edges", graph.num_nodes(), graph.num_edges());
            if list_nodes {
                for node in graph.nodes() {
                    println!("{}", node);
                }
            }
        }
    }

    Ok(())
}
