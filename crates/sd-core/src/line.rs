//! Log line records.
//!
//! A [`LogLine`] is created unclassified by the normalizer, classified in
//! place by the classifier sweep, and possibly re-labelled by the validator.
//! The raw text and id are never touched after creation, which is what lets
//! a caller edit one line and re-run the pipeline without losing track of
//! the rest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::{ResolvedDate, ResolvedTime};
use crate::types::LineId;

/// A line-scoped validation problem.
///
/// Issues never abort the pipeline; they are attached to the offending line
/// and the rest of the log is processed normally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineIssue {
    /// A time-shaped line appeared with no governing valid date above it.
    #[error("time entry needs a preceding valid date line")]
    OrphanTime,

    /// The line matches neither date, time, nor comment grammar.
    #[error("unrecognized line format")]
    UnrecognizedFormat,

    /// A date-shaped token failed calendar validation (e.g. 31 apr).
    #[error("invalid date value")]
    InvalidDateValue,

    /// A date marker's position contradicts the log's inferred polarity.
    #[error("date out of order relative to majority direction")]
    DateOrder,

    /// A time entry is earlier than a preceding entry in the same day.
    #[error("time out of order within day")]
    TimeOrder,
}

/// What a line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    /// Empty or not yet classified.
    Blank,
    /// A `//` or `#` comment; transparent to date tracking.
    Comment,
    /// A line introducing a calendar date for the entries below it.
    ///
    /// `date` is `None` when the text was date-shaped but failed calendar
    /// validation; the validator flags such markers.
    DateMarker { date: Option<ResolvedDate> },
    /// An event at a specific time of day under the current date marker.
    TimeEntry {
        time: ResolvedTime,
        /// The entry's free text split on the configured separators.
        phrases: Vec<String>,
    },
    /// A line the grammar rejects; the issue says why.
    Error,
}

/// One logical line of the diary, with a stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// Stable caller-opaque identifier, assigned once at normalization.
    pub id: LineId,

    /// The line text exactly as the caller supplied it.
    pub raw_text: String,

    /// Current classification.
    pub kind: LineKind,

    /// Why the line is an error, when it is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<LineIssue>,
}

impl LogLine {
    /// Creates a fresh, unclassified line.
    #[must_use]
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            id: LineId::generate(),
            raw_text: raw_text.into(),
            kind: LineKind::Blank,
            issue: None,
        }
    }

    /// Marks the line as an error with the given issue.
    pub fn flag(&mut self, issue: LineIssue) {
        self.kind = LineKind::Error;
        self.issue = Some(issue);
    }

    /// Human-readable reason, present exactly when the line has an issue.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.issue.map(|issue| issue.to_string())
    }

    /// Whether the line ended up rejected.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, LineKind::Error)
    }
}
