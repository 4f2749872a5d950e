//! Raw text normalization.

use crate::line::LogLine;

/// Splits a raw text block into ordered, trimmed, non-empty log lines.
///
/// Newlines end a line; semicolons act as soft line breaks inside one, so a
/// compact entry like `6:15 woke; 7:00 tea` becomes two logical lines.
/// Fragments that trim to nothing are dropped. The output order follows the
/// input left to right, and the split is stable: the same text always
/// yields the same line sequence, so re-validation after an edit never
/// reorders unrelated lines.
///
/// Each surviving fragment gets a fresh stable [`LineId`](crate::LineId)
/// and starts out unclassified.
#[must_use]
pub fn normalize(raw_text: &str) -> Vec<LogLine> {
    raw_text
        .lines()
        .flat_map(|line| line.split(';'))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(LogLine::new)
        .collect()
}
