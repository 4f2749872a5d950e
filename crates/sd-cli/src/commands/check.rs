//! Implementation of the `sd check` command.
//!
//! Reads a diary file, runs the full validation pipeline, and prints one
//! row per line with its classification and reason, followed by a summary.
//! With `--json` the raw report is emitted instead, in the exact shape
//! `sd export` accepts back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;

use sd_core::{LineKind, LogLine, ValidationReport, validate_text};

use crate::config::Config;
use crate::year::year_from_filename;

/// Run the check command.
///
/// Returns `true` when every line validated cleanly.
pub fn run(file: &Path, year: Option<i32>, json: bool, config: &Config) -> Result<bool> {
    let raw_text = fs::read_to_string(file)
        .with_context(|| format!("failed to read diary file: {}", file.display()))?;

    let year = year.unwrap_or_else(|| resolve_year(file, &config.year_pattern));
    tracing::debug!(year, file = %file.display(), "validating diary");

    let report = validate_text(&raw_text, year, &config.to_parse_options());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render(&report);
    }

    Ok(report.error_count() == 0)
}

/// Year from the filename pattern, falling back to the current year.
fn resolve_year(file: &Path, pattern: &str) -> i32 {
    file.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| year_from_filename(n, pattern))
        .unwrap_or_else(|| chrono::Local::now().year())
}

/// Prints the human-readable per-line table and summary.
fn render(report: &ValidationReport) {
    for line in &report.lines {
        println!("{}", format_row(line));
    }

    println!();
    println!("polarity: {}", report.polarity);
    let errors = report.error_count();
    if errors == 0 {
        println!("all {} line(s) are valid", report.lines.len());
    } else {
        println!(
            "{errors} of {} line(s) need correction",
            report.lines.len()
        );
    }
}

/// One table row: status, kind, raw text, and the reason when rejected.
fn format_row(line: &LogLine) -> String {
    let status = if line.is_error() { "ERR" } else { " ok" };
    let label = kind_label(&line.kind);
    match line.reason() {
        Some(reason) => format!("{status}  {label:<8} {}  ({reason})", line.raw_text),
        None => format!("{status}  {label:<8} {}", line.raw_text),
    }
}

const fn kind_label(kind: &LineKind) -> &'static str {
    match kind {
        LineKind::Blank => "blank",
        LineKind::Comment => "comment",
        LineKind::DateMarker { .. } => "date",
        LineKind::TimeEntry { .. } => "time",
        LineKind::Error => "error",
    }
}
