//! Date and time token resolution.
//!
//! These are pure recognizers over raw text: they report whether a byte
//! pattern is a legal date or time token and what it parses to. They know
//! nothing about line classification or ordering.

use serde::{Deserialize, Serialize};

/// A calendar date resolved from a date token plus a supplied year.
///
/// Only constructible for legal calendar dates (leap years respected), so a
/// value of this type never holds a Feb 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolvedDate {
    /// Year the log was attributed to.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, validated against month and year.
    pub day: u32,
}

/// A time of day resolved from the front of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTime {
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59. Zero when the token had no seconds field.
    pub second: u32,
    /// Everything after the time token, trimmed.
    pub text: String,
}

impl ResolvedTime {
    /// Minutes since midnight, for ordering entries within a day.
    #[must_use]
    pub const fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Month names recognized by the date scanner, indexed by month - 1.
const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A date-shaped token: a 1-2 digit day followed by a month word.
///
/// Shape only; calendar validity is checked by [`DateToken::resolve`]. The
/// split exists because a line like "31 apr" is still a date *marker* even
/// though it fails calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken {
    /// Day digits as written, not yet validated against the month.
    pub day: u32,
    /// Month, 1-12, matched from the month word.
    pub month: u32,
}

impl DateToken {
    /// Scans the start of `token` for a date shape.
    ///
    /// Matches a leading 1-2 digit day, whitespace, then a word of three or
    /// more letters whose first three letters name a month
    /// (case-insensitive). Trailing text after the month word is allowed
    /// and ignored; the caller decides whether that matters.
    #[must_use]
    pub fn scan(token: &str) -> Option<Self> {
        let token = token.trim();
        let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() || digits.len() > 2 {
            return None;
        }
        let rest = token[digits.len()..].trim_start();
        if rest.len() == token.len() - digits.len() {
            // No whitespace between day and month word.
            return None;
        }

        let word: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();
        if word.len() < 3 {
            return None;
        }
        let prefix = word[..3].to_ascii_lowercase();
        let month = MONTH_NAMES.iter().position(|m| *m == prefix)? as u32 + 1;

        // 1-2 digits always fit in u32.
        let day = digits.parse().ok()?;
        Some(Self { day, month })
    }

    /// Validates the scanned day against the month's day count for `year`.
    #[must_use]
    pub fn resolve(self, year: i32) -> Option<ResolvedDate> {
        chrono::NaiveDate::from_ymd_opt(year, self.month, self.day)?;
        Some(ResolvedDate {
            year,
            month: self.month,
            day: self.day,
        })
    }
}

/// Resolves a date token for the given year.
///
/// Returns `None` both when the token is not date-shaped and when the day
/// is illegal for the month (use [`DateToken::scan`] to tell those apart).
#[must_use]
pub fn resolve_date(token: &str, year: i32) -> Option<ResolvedDate> {
    DateToken::scan(token)?.resolve(year)
}

/// Resolves a `H:MM` or `H:MM:SS` prefix into a time of day.
///
/// The hour is 1-2 digits (0-23); minute and second are exactly two digits
/// (0-59). Whatever follows the matched prefix becomes the trimmed `text`
/// field. Returns `None` if the prefix does not match, regardless of what
/// follows.
#[must_use]
pub fn resolve_time(token: &str) -> Option<ResolvedTime> {
    let token = token.trim_start();
    let (hour, rest) = take_digits(token, 1, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (minute, rest) = take_digits(rest, 2, 2)?;

    // Seconds are optional; ":9" after the minutes is trailing text, not a
    // malformed seconds field.
    let (second, rest) = rest
        .strip_prefix(':')
        .and_then(|after| take_digits(after, 2, 2))
        .unwrap_or((0, rest));

    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    Some(ResolvedTime {
        hour,
        minute,
        second,
        text: rest.trim().to_string(),
    })
}

/// Whether any `d:dd` / `dd:dd` substring occurs in `text`.
///
/// Used by the classifier to keep time-bearing lines out of the date rule.
#[must_use]
pub fn contains_time_token(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.windows(4).any(|w| {
        w[0].is_ascii_digit() && w[1] == b':' && w[2].is_ascii_digit() && w[3].is_ascii_digit()
    })
}

/// Takes between `min` and `max` leading ASCII digits, returning the parsed
/// value and the remainder.
fn take_digits(s: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let count = s
        .chars()
        .take(max)
        .take_while(char::is_ascii_digit)
        .count();
    if count < min {
        return None;
    }
    // Beyond `max` digits the token is something else (e.g. "123:45").
    if s[count..].starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let value = s[..count].parse().ok()?;
    Some((value, &s[count..]))
}
