//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Invalid polarity value.
    #[error("invalid polarity: {value}")]
    InvalidPolarity { value: String },

    /// Invalid invalid-date policy value.
    #[error("invalid date policy: {value}")]
    InvalidDatePolicy { value: String },
}

/// A validated line identifier.
///
/// Line IDs are assigned once by the normalizer and preserved across
/// re-validation, so a caller editing a single line can track it through
/// repeated pipeline runs. They are opaque to the pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "line ID" });
        }
        Ok(Self(id))
    }

    /// Generates a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> Self {
        id.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The dominant chronological direction of a log's date markers.
///
/// Inferred once per log from the sequence of resolved dates and reused for
/// the whole validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Dates run oldest-first.
    Ascending,
    /// Dates run newest-first.
    Descending,
}

impl Polarity {
    /// String representation for display and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            _ => Err(ValidationError::InvalidPolarity {
                value: s.to_string(),
            }),
        }
    }
}

/// How entries following a calendar-invalid date marker are treated.
///
/// The marker itself is always flagged; this policy only decides whether it
/// still governs the lines below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidDatePolicy {
    /// The invalid marker still opens a group and keeps governing entries.
    GroupUnderInvalid,
    /// Entries below the invalid marker are orphans (flagged as such).
    Orphan,
}

impl InvalidDatePolicy {
    /// String representation for config files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GroupUnderInvalid => "group_under_invalid",
            Self::Orphan => "orphan",
        }
    }
}

impl fmt::Display for InvalidDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvalidDatePolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group_under_invalid" | "group" => Ok(Self::GroupUnderInvalid),
            "orphan" => Ok(Self::Orphan),
            _ => Err(ValidationError::InvalidDatePolicy {
                value: s.to_string(),
            }),
        }
    }
}

/// Tunable knobs for classification and validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Characters that split a time entry's trailing text into phrases.
    pub phrase_separators: Vec<char>,

    /// Characters stripped from the end of a line before recognition.
    pub trailing_ignore_chars: Vec<char>,

    /// What governs entries after a calendar-invalid date marker.
    pub invalid_date_policy: InvalidDatePolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            phrase_separators: vec!['.', ','],
            trailing_ignore_chars: vec![';'],
            invalid_date_policy: InvalidDatePolicy::GroupUnderInvalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_id_rejects_empty() {
        assert!(LineId::new("").is_err());
        assert!(LineId::new("line-1").is_ok());
    }

    #[test]
    fn line_id_generate_is_unique() {
        let a = LineId::generate();
        let b = LineId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn line_id_serde_roundtrip() {
        let id = LineId::new("line-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"line-42\"");
        let parsed: LineId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn line_id_serde_rejects_empty() {
        let result: Result<LineId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn polarity_from_str() {
        assert_eq!("ascending".parse::<Polarity>().unwrap(), Polarity::Ascending);
        assert_eq!("desc".parse::<Polarity>().unwrap(), Polarity::Descending);
        assert!("sideways".parse::<Polarity>().is_err());
    }

    #[test]
    fn polarity_serde_roundtrip() {
        let json = serde_json::to_string(&Polarity::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
        let parsed: Polarity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Polarity::Descending);
    }

    #[test]
    fn invalid_date_policy_from_str() {
        assert_eq!(
            "group".parse::<InvalidDatePolicy>().unwrap(),
            InvalidDatePolicy::GroupUnderInvalid
        );
        assert_eq!(
            "orphan".parse::<InvalidDatePolicy>().unwrap(),
            InvalidDatePolicy::Orphan
        );
        assert!("maybe".parse::<InvalidDatePolicy>().is_err());
    }

    #[test]
    fn parse_options_defaults() {
        let opts = ParseOptions::default();
        assert_eq!(opts.phrase_separators, vec!['.', ',']);
        assert_eq!(opts.trailing_ignore_chars, vec![';']);
        assert_eq!(
            opts.invalid_date_policy,
            InvalidDatePolicy::GroupUnderInvalid
        );
    }
}
