//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use sd_core::{InvalidDatePolicy, ParseOptions};

/// Application configuration.
///
/// Layered: built-in defaults, then `config.toml` in the platform config
/// directory, then an explicitly passed config file, then `SD_`-prefixed
/// environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Characters that split a time entry's text into phrases.
    pub phrase_separators: String,

    /// Characters stripped from line ends before recognition.
    pub trailing_ignore_chars: String,

    /// Filename pattern locating the log's year; `YYYY` marks the digits.
    pub year_pattern: String,

    /// What governs entries after a calendar-invalid date marker.
    pub invalid_date_policy: InvalidDatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phrase_separators: ".,".to_string(),
            trailing_ignore_chars: ";".to_string(),
            year_pattern: "YYYY".to_string(),
            invalid_date_policy: InvalidDatePolicy::GroupUnderInvalid,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SD_*)
        figment = figment.merge(Env::prefixed("SD_"));

        figment.extract()
    }

    /// The pipeline options this configuration describes.
    #[must_use]
    pub fn to_parse_options(&self) -> ParseOptions {
        ParseOptions {
            phrase_separators: self.phrase_separators.chars().collect(),
            trailing_ignore_chars: self.trailing_ignore_chars.chars().collect(),
            invalid_date_policy: self.invalid_date_policy,
        }
    }
}

/// Returns the platform-specific config directory for sd.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sd"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_original_wizard_defaults() {
        let config = Config::default();
        assert_eq!(config.phrase_separators, ".,");
        assert_eq!(config.trailing_ignore_chars, ";");
        assert_eq!(config.year_pattern, "YYYY");
        assert_eq!(
            config.invalid_date_policy,
            InvalidDatePolicy::GroupUnderInvalid
        );
    }

    #[test]
    fn to_parse_options_splits_chars() {
        let config = Config {
            phrase_separators: ".,;".to_string(),
            ..Config::default()
        };
        let opts = config.to_parse_options();
        assert_eq!(opts.phrase_separators, vec!['.', ',', ';']);
        assert_eq!(opts.trailing_ignore_chars, vec![';']);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "invalid_date_policy = \"orphan\"\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.invalid_date_policy, InvalidDatePolicy::Orphan);
        // Untouched fields keep their defaults.
        assert_eq!(config.phrase_separators, ".,");
    }
}
