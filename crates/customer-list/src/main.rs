//! `custlist` - CLI for customer-list
//!
//! This binary runs the interactive customer list menu and a few helper
//! commands around its configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use customer_list::cli::{handle_config, BatchCommand, Cli, Command};
use customer_list::session::run_batch;
use customer_list::{init_logging, Config, Session};

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Configuration is loaded per command so `config validate` can check a
    // file even when the active one is broken
    let config_path = cli.config.clone();
    let result = match cli.take_command() {
        Command::Run => load_config(config_path).and_then(handle_run),
        Command::Batch(batch_cmd) => {
            load_config(config_path).and_then(|config| handle_batch(&config, &batch_cmd))
        }
        Command::Config(config_cmd) => {
            let mut stdout = io::stdout().lock();
            handle_config(config_cmd, config_path, &mut stdout).map_err(anyhow::Error::from)
        }
    };

    if let Err(err) = &result {
        if let Some(list_err) = err.downcast_ref::<customer_list::Error>() {
            if list_err.is_allocation_failure() {
                error!(%list_err, "fatal program error, terminating");
            }
        }
    }
    result
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(config_path).context("loading configuration")
}

fn handle_run(config: Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}

fn handle_batch(config: &Config, cmd: &BatchCommand) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    run_batch(config, cmd.names.as_slice(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
