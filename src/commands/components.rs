//! Components command: threshold-filtered connected components

use std::path::Path;
use std::time::Instant;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use edgeline_core::error::Result;

pub fn execute(cli: &Cli, file: &Path, threshold: Option<f64>, start: Instant) -> Result<()> {
    let graph = super::load_graph(cli, file, start)?;

    let limit = threshold.unwrap_or(f64::INFINITY);
    let components = graph.connected_components(limit);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    // Unrestricted threshold serializes as null
                    "threshold": threshold,
                    "count": components.len(),
                    "components": components,
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} components", components.len());
            }
            for (idx, component) in components.iter().enumerate() {
                println!("component {}: {}", idx + 1, component.join(", "));
            }
        }
    }

    Ok(())
}
