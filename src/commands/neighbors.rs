//! Neighbors command: degree and adjacency of a single node

use std::path::Path;
use std::time::Instant;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use edgeline_core::error::Result;

pub fn execute(cli: &Cli, file: &Path, node: &str, start: Instant) -> Result<()> {
    let graph = super::load_graph(cli, file, start)?;

    // Unknown labels are not an error: they simply have no neighbors
    let neighbors = graph.neighbors(node);

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = neighbors
                .iter()
                .map(|label| {
                    json!({
                        "label": label,
                        "weight": graph.edge_weight(node, label),
                    })
                })
                .collect();
            println!(
                "{}",
                json!({
                    "node": node,
                    "degree": neighbors.len(),
                    "neighbors": entries,
                })
            );
        }
        OutputFormat::Human => {
            println!("{}: {} neighbors", node, neighbors.len());
            for label in &neighbors {
                // Weight always present for a listed neighbor
                let weight = graph.edge_weight(node, label).unwrap_or_default();
                println!("  {} ({})", label, weight);
            }
        }
    }

    Ok(())
}
