//! Threshold command: minimax connecting threshold between two nodes

use std::path::Path;
use std::time::Instant;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use edgeline_core::error::Result;

pub fn execute(cli: &Cli, file: &Path, from: &str, to: &str, start: Instant) -> Result<()> {
    let graph = super::load_graph(cli, file, start)?;

    let result = graph.smallest_connecting_threshold(from, to);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "from": from,
                    "to": to,
                    "found": result.is_some(),
                    "threshold": result,
                })
            );
        }
        OutputFormat::Human => match result {
            Some(threshold) => println!("smallest connecting threshold: {}", threshold),
            None => println!("{} and {} are not connected", from, to),
        },
    }

    Ok(())
}
