//! Path command: unweighted or weighted shortest path between two nodes

use std::path::Path;
use std::time::Instant;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use edgeline_core::error::Result;
use edgeline_core::{PathEdge, WeightedGraph};

pub fn execute(
    cli: &Cli,
    file: &Path,
    from: &str,
    to: &str,
    weighted: bool,
    start: Instant,
) -> Result<()> {
    let graph = super::load_graph(cli, file, start)?;

    if weighted {
        output_weighted(cli, &graph, from, to)
    } else {
        output_unweighted(cli, &graph, from, to)
    }
}

fn output_unweighted(cli: &Cli, graph: &WeightedGraph, from: &str, to: &str) -> Result<()> {
    let result = graph.shortest_path_unweighted(from, to);

    match cli.format {
        OutputFormat::Json => {
            let (found, nodes) = match &result {
                Some(nodes) => (true, nodes.as_slice()),
                None => (false, &[][..]),
            };
            println!(
                "{}",
                json!({
                    "from": from,
                    "to": to,
                    "weighted": false,
                    "found": found,
                    "nodes": nodes,
                    "hops": if found { json!(nodes.len() - 1) } else { json!(null) },
                })
            );
        }
        OutputFormat::Human => match result {
            Some(nodes) => {
                println!("{}", nodes.join(" -> "));
                if !cli.quiet {
                    println!("hops: {}", nodes.len() - 1);
                }
            }
            None => println!("no path from {} to {}", from, to),
        },
    }

    Ok(())
}

fn output_weighted(cli: &Cli, graph: &WeightedGraph, from: &str, to: &str) -> Result<()> {
    let result = graph.shortest_path_weighted(from, to);

    match cli.format {
        OutputFormat::Json => {
            let (found, edges) = match &result {
                Some(edges) => (true, edges.as_slice()),
                None => (false, &[][..]),
            };
            println!(
                "{}",
                json!({
                    "from": from,
                    "to": to,
                    "weighted": true,
                    "found": found,
                    "edges": edges,
                    "total_weight": if found { json!(total_weight(edges)) } else { json!(null) },
                })
            );
        }
        OutputFormat::Human => match result {
            Some(edges) if edges.is_empty() => println!("{}", from),
            Some(edges) => {
                for edge in &edges {
                    println!("{} -> {} ({})", edge.from, edge.to, edge.weight);
                }
                if !cli.quiet {
                    println!("total weight: {}", total_weight(&edges));
                }
            }
            None => println!("no path from {} to {}", from, to),
        },
    }

    Ok(())
}

fn total_weight(edges: &[PathEdge]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}
