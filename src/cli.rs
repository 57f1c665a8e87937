//! CLI argument parsing for edgeline
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

pub use edgeline_core::format::OutputFormat;

/// Edgeline - weighted graph queries over edge-list files
#[derive(Parser, Debug)]
#[command(name = "edgeline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize an edge list: node and edge counts
    Info {
        /// Edge-list file (one `u,v,weight` line per edge)
        file: PathBuf,

        /// List every node label
        #[arg(long)]
        nodes: bool,
    },

    /// Show a node's degree and neighbors
    Neighbors {
        /// Edge-list file (one `u,v,weight` line per edge)
        file: PathBuf,

        /// Node label
        node: String,
    },

    /// Find a shortest path between two nodes
    Path {
        /// Edge-list file (one `u,v,weight` line per edge)
        file: PathBuf,

        /// Start node label
        from: String,

        /// End node label
        to: String,

        /// Minimize total edge weight instead of hop count
        #[arg(long, short)]
        weighted: bool,
    },

    /// Group nodes into components connected at or below a weight threshold
    Components {
        /// Edge-list file (one `u,v,weight` line per edge)
        file: PathBuf,

        /// Maximum edge weight to traverse (defaults to unrestricted)
        #[arg(long, short)]
        threshold: Option<f64>,
    },

    /// Find the smallest threshold connecting two nodes
    Threshold {
        /// Edge-list file (one `u,v,weight` line per edge)
        file: PathBuf,

        /// Start node label
        from: String,

        /// End node label
        to: String,
    },
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}
