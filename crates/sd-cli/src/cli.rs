//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Symptom diary validator.
///
/// Parses free-form diary text into dated, timed records, infers whether
/// the log runs oldest- or newest-first, and reports every line that
/// breaks the grammar or the chronology.
#[derive(Debug, Parser)]
#[command(name = "sd", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a diary file and report per-line results.
    Check {
        /// The diary text file to validate.
        file: PathBuf,

        /// Year the log belongs to; defaults to the year in the filename,
        /// then to the current year.
        #[arg(long)]
        year: Option<i32>,

        /// Emit the full validation report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Reconstruct plain diary text from a saved JSON report.
    Export {
        /// A JSON report produced by `sd check --json`.
        report: PathBuf,
    },
}
