//! Command-line arguments.
use clap::Parser;
use std::path::PathBuf;

/// Keep agent convention files symlinked to their canonical source.
///
/// With no arguments, the project root is the parent of the directory that
/// holds this executable.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "agent-links",
    about = "Keep agent convention files symlinked to a canonical source",
    version = option_env!("AGENT_LINKS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Override project root directory
    #[arg(long)]
    pub root: Option<PathBuf>,
}
