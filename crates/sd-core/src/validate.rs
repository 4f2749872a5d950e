//! Chronological and structural validation.
//!
//! Runs after classification and re-labels offending lines as errors
//! without discarding anything: grouping and ordering are global
//! properties, so every pass re-walks the full line list, but lines whose
//! text did not change keep their ids and classifications.

use serde::{Deserialize, Serialize};

use crate::classify::classify_lines;
use crate::line::{LineIssue, LineKind, LogLine};
use crate::normalize::normalize;
use crate::polarity::infer_polarity;
use crate::token::ResolvedDate;
use crate::types::{InvalidDatePolicy, ParseOptions, Polarity};

/// The fully classified line sequence plus the inferred direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every input line, each with a final kind.
    pub lines: Vec<LogLine>,
    /// The log's inferred chronological direction.
    pub polarity: Polarity,
}

impl ValidationReport {
    /// Number of lines that ended up rejected.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_error()).count()
    }

    /// Reconstructs the plain text the lines came from, one per row.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let texts: Vec<&str> = self.lines.iter().map(|l| l.raw_text.as_str()).collect();
        texts.join("\n")
    }
}

/// Lines governed by one date marker, tracked by index into the line list.
///
/// The leading run of lines before any marker forms the orphan group
/// (`marker: None`). Together the groups partition the line sequence.
struct DateGroup {
    marker: Option<usize>,
    date: Option<ResolvedDate>,
    entries: Vec<usize>,
}

/// Validates an already-normalized line list for the given year.
///
/// Re-classifies every line from its raw text (ids are untouched), infers
/// the log's polarity, then checks cross-group date order and intra-group
/// time order. No input ever makes this fail; malformed lines are flagged
/// and the rest processed normally. Running it again on its own output
/// yields the same kinds and reasons.
#[must_use]
pub fn validate(mut lines: Vec<LogLine>, year: i32, opts: &ParseOptions) -> ValidationReport {
    classify_lines(&mut lines, year, opts);

    let groups = group_by_date(&lines, opts);

    let marker_dates: Vec<ResolvedDate> = groups.iter().filter_map(|g| g.date).collect();
    let polarity = infer_polarity(&marker_dates);

    check_date_order(&mut lines, &groups, polarity);
    check_time_order(&mut lines, &groups);

    let errors = lines.iter().filter(|l| l.is_error()).count();
    tracing::debug!(lines = lines.len(), errors, %polarity, "validation complete");

    ValidationReport { lines, polarity }
}

/// Normalizes raw text and validates it in one call.
#[must_use]
pub fn validate_text(raw_text: &str, year: i32, opts: &ParseOptions) -> ValidationReport {
    validate(normalize(raw_text), year, opts)
}

/// Walks lines in order, opening a group at each date marker.
///
/// Non-marker lines attach to the open group, or to the orphan group when
/// none is open yet. Under the orphan policy a calendar-invalid marker
/// opens a group for itself but does not keep entries.
fn group_by_date(lines: &[LogLine], opts: &ParseOptions) -> Vec<DateGroup> {
    let mut groups = vec![DateGroup {
        marker: None,
        date: None,
        entries: Vec::new(),
    }];
    let mut open: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        match &line.kind {
            LineKind::Blank => {}
            LineKind::DateMarker { date } => {
                groups.push(DateGroup {
                    marker: Some(index),
                    date: *date,
                    entries: Vec::new(),
                });
                let governs = date.is_some()
                    || opts.invalid_date_policy == InvalidDatePolicy::GroupUnderInvalid;
                open = governs.then_some(groups.len() - 1);
            }
            LineKind::TimeEntry { .. } | LineKind::Comment | LineKind::Error => {
                let target = open.unwrap_or(0);
                groups[target].entries.push(index);
            }
        }
    }
    groups
}

/// Flags markers whose position contradicts the inferred polarity, and
/// markers whose date failed calendar validation.
fn check_date_order(lines: &mut [LogLine], groups: &[DateGroup], polarity: Polarity) {
    let dated: Vec<(usize, ResolvedDate)> = groups
        .iter()
        .filter_map(|g| Some((g.marker?, g.date?)))
        .collect();

    // Stable sort, so markers resolving to the same date keep their
    // encounter order and are never flagged against each other.
    let mut expected = dated.clone();
    match polarity {
        Polarity::Ascending => expected.sort_by(|a, b| a.1.cmp(&b.1)),
        Polarity::Descending => expected.sort_by(|a, b| b.1.cmp(&a.1)),
    }

    for ((actual, _), (wanted, _)) in dated.iter().zip(&expected) {
        if actual != wanted {
            lines[*actual].flag(LineIssue::DateOrder);
        }
    }

    for group in groups {
        if let Some(marker) = group.marker {
            if group.date.is_none() {
                lines[marker].flag(LineIssue::InvalidDateValue);
            }
        }
    }
}

/// Flags time entries that run backwards within their day.
///
/// Each entry is compared against the latest time seen earlier in the same
/// group (encounter order, not a global sort), so only the out-of-place
/// lines are flagged, not the whole group.
fn check_time_order(lines: &mut [LogLine], groups: &[DateGroup]) {
    for group in groups {
        let timed: Vec<(usize, u32)> = group
            .entries
            .iter()
            .filter_map(|&index| match &lines[index].kind {
                LineKind::TimeEntry { time, .. } => Some((index, time.minutes_since_midnight())),
                _ => None,
            })
            .collect();

        let mut latest: Option<u32> = None;
        for (index, minutes) in timed {
            if latest.is_some_and(|seen| minutes < seen) {
                lines[index].flag(LineIssue::TimeOrder);
            }
            latest = Some(latest.map_or(minutes, |seen| seen.max(minutes)));
        }
    }
}
