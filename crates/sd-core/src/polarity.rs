//! Chronological direction inference.

use crate::token::ResolvedDate;
use crate::types::Polarity;

/// Infers the dominant direction of a sequence of resolved marker dates.
///
/// Walks consecutive pairs and counts ascending vs. descending steps;
/// equal neighbours abstain. With fewer than two dates there is nothing to
/// vote on, and ties are possible either way, so both cases fall back to
/// [`Polarity::Descending`]: diaries are more commonly newest-first.
#[must_use]
pub fn infer_polarity(dates: &[ResolvedDate]) -> Polarity {
    if dates.len() < 2 {
        tracing::debug!(
            markers = dates.len(),
            "too few dates to infer direction, defaulting to descending"
        );
        return Polarity::Descending;
    }

    let mut asc_count = 0u32;
    let mut desc_count = 0u32;
    for pair in dates.windows(2) {
        if pair[1] > pair[0] {
            asc_count += 1;
        } else if pair[1] < pair[0] {
            desc_count += 1;
        }
    }

    let polarity = if asc_count > desc_count {
        Polarity::Ascending
    } else {
        Polarity::Descending
    };
    tracing::debug!(asc_count, desc_count, %polarity, "inferred date order");
    polarity
}
