//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timetravel_tictactoe::ViewOptions;
use tracing::{debug, info, instrument, warn};

/// User-configurable settings for the front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Show "(col,row)" after each move label.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// Initial move-list order.
    #[serde(default = "default_sort_ascending")]
    sort_ascending: bool,

    /// Report a full board without a winner as "Draw".
    #[serde(default)]
    announce_draw: bool,

    /// Log file used by the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_show_coordinates() -> bool {
    true
}

fn default_sort_ascending() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel_tui.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_coordinates: default_show_coordinates(),
            sort_ascending: default_sort_ascending(),
            announce_draw: false,
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if given and present, otherwise the defaults.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => {
                warn!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// View switches derived from these settings.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            show_coordinates: self.show_coordinates,
            announce_draw: self.announce_draw,
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = toml::from_str("announce_draw = true").unwrap();
        assert!(*settings.announce_draw());
        assert!(*settings.show_coordinates());
        assert!(*settings.sort_ascending());
        assert_eq!(settings.log_file(), &PathBuf::from("timetravel_tui.log"));
    }

    #[test]
    fn test_view_options() {
        let settings: Settings = toml::from_str("show_coordinates = false").unwrap();
        let opts = settings.view_options();
        assert!(!opts.show_coordinates);
        assert!(!opts.announce_draw);
    }
}
