//! Year extraction from diary filenames.

use regex::Regex;

/// Pulls a four-digit year out of a filename using a `YYYY` pattern.
///
/// The pattern is taken literally except for the `YYYY` placeholder, which
/// matches the year digits: `diary_YYYY` finds 2023 in `diary_2023.txt`,
/// and the default pattern `YYYY` finds the first four-digit run anywhere
/// in the name. Returns `None` when the pattern has no placeholder or does
/// not match.
#[must_use]
pub fn year_from_filename(filename: &str, pattern: &str) -> Option<i32> {
    let regex_str = regex::escape(pattern).replace("YYYY", r"(\d{4})");
    let re = Regex::new(&regex_str).ok()?;
    re.captures(filename)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_finds_first_year_run() {
        assert_eq!(year_from_filename("diary_2023.txt", "YYYY"), Some(2023));
        assert_eq!(year_from_filename("2019-symptoms", "YYYY"), Some(2019));
    }

    #[test]
    fn anchored_pattern_skips_other_digits() {
        assert_eq!(
            year_from_filename("v2-diary_2023.txt", "diary_YYYY"),
            Some(2023)
        );
    }

    #[test]
    fn pattern_text_is_taken_literally() {
        // The dot must not act as a regex wildcard.
        assert_eq!(year_from_filename("diaryX2023", "diary.YYYY"), None);
        assert_eq!(year_from_filename("diary.2023", "diary.YYYY"), Some(2023));
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(year_from_filename("diary.txt", "YYYY"), None);
        assert_eq!(year_from_filename("diary_2023.txt", "no-placeholder"), None);
    }
}
