//! Context-dependent line classification.
//!
//! The grammar is a fixed-priority chain of recognizers (blank, comment,
//! date, time, fallback error). The only context threaded between lines is
//! a single flag: whether a valid governing date is currently in force.
//! Keeping that flag an explicit parameter (instead of shared state) is
//! what makes a single edited line cheap to re-classify: call
//! [`classify`] with the flag that held just above it.

use crate::line::{LineIssue, LineKind, LogLine};
use crate::token::{DateToken, contains_time_token, resolve_time};
use crate::types::{InvalidDatePolicy, ParseOptions};

/// The outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// What the line is.
    pub kind: LineKind,
    /// Why it was rejected, if it was.
    pub issue: Option<LineIssue>,
    /// The date-validity flag to carry to the next line.
    pub next_date_valid: bool,
}

/// Classifies a single line given the current date-validity flag.
///
/// Pure and deterministic: the same `(text, date_valid)` pair always yields
/// the same outcome for a given year and options.
#[must_use]
pub fn classify(text: &str, date_valid: bool, year: i32, opts: &ParseOptions) -> Classification {
    let cleaned = strip_trailing(text, &opts.trailing_ignore_chars);

    if cleaned.is_empty() {
        return Classification {
            kind: LineKind::Blank,
            issue: None,
            next_date_valid: date_valid,
        };
    }

    // Comments are transparent: they neither need a date nor reset one.
    if cleaned.starts_with("//") || cleaned.starts_with('#') {
        return Classification {
            kind: LineKind::Comment,
            issue: None,
            next_date_valid: date_valid,
        };
    }

    // A date marker must be date-shaped and carry no time token anywhere;
    // "1 jun 6:15 woke" is a time line that happens to mention a date.
    if let Some(token) = DateToken::scan(cleaned) {
        if !contains_time_token(cleaned) {
            let date = token.resolve(year);
            let next_date_valid = date.is_some()
                || opts.invalid_date_policy == InvalidDatePolicy::GroupUnderInvalid;
            return Classification {
                kind: LineKind::DateMarker { date },
                issue: None,
                next_date_valid,
            };
        }
    }

    if let Some(time) = resolve_time(cleaned) {
        if date_valid {
            let phrases = split_phrases(&time.text, &opts.phrase_separators);
            return Classification {
                kind: LineKind::TimeEntry { time, phrases },
                issue: None,
                next_date_valid: true,
            };
        }
        return Classification {
            kind: LineKind::Error,
            issue: Some(LineIssue::OrphanTime),
            next_date_valid: false,
        };
    }

    Classification {
        kind: LineKind::Error,
        issue: Some(LineIssue::UnrecognizedFormat),
        next_date_valid: false,
    }
}

/// A resumable left-to-right classification sweep.
///
/// Processing can be chunked into bounded batches with a yield point in
/// between; batch boundaries are purely a scheduling detail and never
/// change the result. The sweep holds no state besides its position and
/// the date-validity flag.
#[derive(Debug)]
pub struct Sweep<'a> {
    lines: &'a mut [LogLine],
    year: i32,
    opts: &'a ParseOptions,
    date_valid: bool,
    position: usize,
}

impl<'a> Sweep<'a> {
    /// Starts a sweep at the first line with no date in force.
    pub fn new(lines: &'a mut [LogLine], year: i32, opts: &'a ParseOptions) -> Self {
        Self {
            lines,
            year,
            opts,
            date_valid: false,
            position: 0,
        }
    }

    /// Classifies up to `max_lines` further lines.
    ///
    /// Returns `true` once every line has been classified.
    pub fn run_batch(&mut self, max_lines: usize) -> bool {
        let end = self.position.saturating_add(max_lines).min(self.lines.len());
        while self.position < end {
            let line = &mut self.lines[self.position];
            let outcome = classify(&line.raw_text, self.date_valid, self.year, self.opts);
            line.kind = outcome.kind;
            line.issue = outcome.issue;
            self.date_valid = outcome.next_date_valid;
            self.position += 1;
        }
        self.is_done()
    }

    /// Runs the remainder of the sweep without yielding.
    pub fn run_to_end(&mut self) {
        let remaining = self.lines.len() - self.position;
        self.run_batch(remaining);
    }

    /// Whether every line has been classified.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.position == self.lines.len()
    }
}

/// Classifies every line in one uninterrupted sweep.
pub fn classify_lines(lines: &mut [LogLine], year: i32, opts: &ParseOptions) {
    let count = lines.len();
    Sweep::new(lines, year, opts).run_to_end();
    tracing::debug!(lines = count, "classification sweep complete");
}

/// Strips trailing ignore characters and surrounding whitespace.
fn strip_trailing<'t>(text: &'t str, ignore: &[char]) -> &'t str {
    text.trim_end_matches(|c: char| c.is_whitespace() || ignore.contains(&c))
        .trim_start()
}

/// Splits a time entry's free text into trimmed, non-empty phrases.
fn split_phrases(text: &str, separators: &[char]) -> Vec<String> {
    if separators.is_empty() {
        if text.is_empty() {
            return Vec::new();
        }
        return vec![text.to_string()];
    }
    text.split(separators)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
