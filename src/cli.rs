use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed task board CLI.
/// Storage defaults to ./board.json or a path passed via --board.
#[derive(Parser)]
#[command(name = "tb", version, about = "Hierarchical task board CLI")]
pub struct Cli {
    /// Path to the JSON board file.
    #[arg(long, global = true)]
    pub board: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
