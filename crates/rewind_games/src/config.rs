//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Board and move-list rendering.
    #[serde(default)]
    display: DisplayConfig,
}

/// Rendering options for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol drawn for unmarked cells.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: String,

    /// Bracket the cells of a winning line.
    #[serde(default = "default_true")]
    highlight_winner: bool,

    /// Print the move list after every accepted intent.
    #[serde(default = "default_true")]
    show_history: bool,

    /// Number rows, columns and moves from 1 instead of 0.
    #[serde(default = "default_true")]
    coordinates_one_based: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_empty_symbol() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            empty_symbol: default_empty_symbol(),
            highlight_winner: true,
            show_history: true,
            coordinates_one_based: true,
        }
    }
}

impl DisplayConfig {
    /// Offset added to zero-based indices for display.
    pub fn index_offset(&self) -> usize {
        usize::from(self.coordinates_one_based)
    }

    /// Converts a user-facing index to a zero-based one.
    ///
    /// Returns `None` for `0` in one-based mode.
    pub fn to_index(&self, shown: usize) -> Option<usize> {
        shown.checked_sub(self.index_offset())
    }
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            display: DisplayConfig::default(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads from `path` when given, otherwise uses defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = RewindConfig::from_toml("").unwrap();
        assert_eq!(config, RewindConfig::default());
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.display().empty_symbol(), ".");
        assert!(*config.display().highlight_winner());
    }

    #[test]
    fn test_partial_display_section() {
        let config = RewindConfig::from_toml(
            r#"
            log_filter = "debug"

            [display]
            empty_symbol = "_"
            coordinates_one_based = false
            "#,
        )
        .unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.display().empty_symbol(), "_");
        assert!(!*config.display().coordinates_one_based());
        assert!(*config.display().show_history());
        assert_eq!(config.display().index_offset(), 0);
    }

    #[test]
    fn test_index_conversion() {
        let one_based = DisplayConfig::default();
        assert_eq!(one_based.to_index(1), Some(0));
        assert_eq!(one_based.to_index(0), None);

        let zero_based: DisplayConfig =
            toml::from_str("coordinates_one_based = false").unwrap();
        assert_eq!(zero_based.to_index(0), Some(0));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nhighlight_winner = false").unwrap();

        let config = RewindConfig::from_file(file.path()).unwrap();
        assert!(!*config.display().highlight_winner());
    }

    #[test]
    fn test_missing_file_reports_location() {
        let dir = tempfile::tempdir().unwrap();
        let err = RewindConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = RewindConfig::from_toml("display = 3").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(RewindConfig::load(None).unwrap(), RewindConfig::default());
    }
}
