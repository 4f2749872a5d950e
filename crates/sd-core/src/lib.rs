//! Core domain logic for the symptom diary toolkit.
//!
//! This crate turns free-form diary text into a validated sequence of
//! typed records:
//! - Normalization: splitting loosely delimited raw text into logical lines
//! - Classification: a context-dependent, online line grammar
//! - Token resolution: date and time tokens with calendar validation
//! - Polarity inference: detecting whether a log runs oldest- or newest-first
//! - Chronology validation: cross-line ordering checks with line-level errors
//!
//! The pipeline is pure and single-threaded; nothing here touches storage
//! or the network. Errors never abort a run: every line comes back with a
//! final kind and, when rejected, a reason.

pub mod classify;
pub mod line;
pub mod normalize;
pub mod polarity;
pub mod token;
pub mod types;
pub mod validate;

pub use classify::{Classification, Sweep, classify, classify_lines};
pub use line::{LineIssue, LineKind, LogLine};
pub use normalize::normalize;
pub use polarity::infer_polarity;
pub use token::{DateToken, ResolvedDate, ResolvedTime, resolve_date, resolve_time};
pub use types::{InvalidDatePolicy, LineId, ParseOptions, Polarity, ValidationError};
pub use validate::{ValidationReport, validate, validate_text};
