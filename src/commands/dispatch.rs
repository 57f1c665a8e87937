//! Command dispatch logic for edgeline

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use edgeline_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Info { file, nodes } => commands::info::execute(cli, file, *nodes, start),

        Commands::Neighbors { file, node } => commands::neighbors::execute(cli, file, node, start),

        Commands::Path {
            file,
            from,
            to,
            weighted,
        } => commands::path::execute(cli, file, from, to, *weighted, start),

        Commands::Components { file, threshold } => {
            commands::components::execute(cli, file, *threshold, start)
        }

        Commands::Threshold { file, from, to } => {
            commands::threshold::execute(cli, file, from, to, start)
        }
    }
}
