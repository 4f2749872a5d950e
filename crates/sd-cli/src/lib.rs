//! Symptom diary CLI library.
//!
//! This crate provides the command-line interface over `sd-core`.

mod cli;
pub mod commands;
mod config;
mod year;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use year::year_from_filename;
