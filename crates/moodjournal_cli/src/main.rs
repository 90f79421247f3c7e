//! `moodjournal` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration (env, then flags) and bootstrap logging.
//! - Dispatch subcommands against the configured entry store.

use anyhow::Result;
use clap::Parser;

mod commands;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Some(log_dir) = config.log_dir.as_deref() {
        moodjournal_core::init_logging(config.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }

    commands::run(cli.command, &config)
}
