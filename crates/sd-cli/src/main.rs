use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sd_cli::commands::{check, export};
use sd_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Commands::Check { file, year, json } => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");

            let clean = check::run(file, *year, *json, &config)?;
            if !clean {
                // Per-line problems are reported on stdout, not as an Err.
                std::process::exit(1);
            }
        }
        Commands::Export { report } => {
            export::run(report)?;
        }
    }

    Ok(())
}
