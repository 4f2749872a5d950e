//! Implementation of the `sd export` command.
//!
//! Reads a JSON report saved by `sd check --json` and reconstructs plain
//! diary text by writing each line's raw text in sequence order to stdout.

use std::fs;
use std::io::{BufWriter, Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};

use sd_core::ValidationReport;

/// Run the export command.
pub fn run(report_path: &Path) -> Result<()> {
    let data = fs::read_to_string(report_path)
        .with_context(|| format!("failed to read report: {}", report_path.display()))?;
    let report: ValidationReport = serde_json::from_str(&data)
        .with_context(|| format!("not a valid report: {}", report_path.display()))?;

    let stdout = stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for line in &report.lines {
        // Handle broken pipe gracefully (e.g., when piped to `head`)
        if writeln!(writer, "{}", line.raw_text).is_err() {
            break;
        }
    }

    Ok(())
}
