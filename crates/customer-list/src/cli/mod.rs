//! Command-line interface for customer-list.
//!
//! This module provides the CLI structure for the `custlist` binary.

mod commands;
mod handlers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{BatchCommand, ConfigCommand};
pub use handlers::handle_config;

use crate::logging::Verbosity;

/// custlist - Keep a customer list in a singly linked list
///
/// Starts an interactive menu by default: add customers, list them, and exit.
#[derive(Debug, Parser)]
#[command(name = "custlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive menu
    Run,

    /// Append the given names, print the list, and exit
    Batch(BatchCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        }
    }

    /// Take the command to execute, `run` if none was given.
    #[must_use]
    pub fn take_command(&mut self) -> Command {
        self.command.take().unwrap_or(Command::Run)
    }
}
