//! Configuration for interactive play.

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a human-vs-computer game.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark the human plays (X moves first).
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Name shown for the human player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the computer player.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Print the computer's evaluation after each of its moves.
    #[serde(default)]
    show_values: bool,
}

#[instrument]
fn default_human_mark() -> Mark {
    Mark::X
}

#[instrument]
fn default_human_name() -> String {
    "Human".to_string()
}

#[instrument]
fn default_ai_name() -> String {
    "Minimax".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            human_name: default_human_name(),
            ai_name: default_ai_name(),
            show_values: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Returns this config with the human's mark replaced.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    /// Returns this config with evaluation output switched on or off.
    pub fn with_show_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
