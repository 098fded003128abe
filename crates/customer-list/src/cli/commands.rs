//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Batch command arguments.
#[derive(Debug, Args)]
pub struct BatchCommand {
    /// Last names to append, in order
    pub names: Vec<String>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
