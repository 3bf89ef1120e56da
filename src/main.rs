//! code-sync - drive the live reload engine from the command line.

mod cli;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use code_sync::{SyncConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SyncConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load `{}`", cli.config.display()))?;
    logger::set_verbose(cli.verbose || config.verbose);

    match &cli.command {
        Commands::Simulate { args } => cli::simulate::run_simulate(args, config),
        Commands::Classify { paths } => {
            cli::classify::run_classify(paths, &config);
            Ok(())
        }
    }
}
