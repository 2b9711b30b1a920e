//! Game configuration: board size and ordered marks.

use crate::marks::MarkSet;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings a [`GameEngine`](crate::GameEngine) is built from.
///
/// ```toml
/// size = 4
/// marks = ["X", "O", "Z"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    #[serde(default = "default_size")]
    size: usize,

    /// Marks in turn order.
    #[serde(default = "default_marks")]
    marks: Vec<String>,
}

#[instrument]
fn default_size() -> usize {
    3
}

#[instrument]
fn default_marks() -> Vec<String> {
    MarkSet::default().symbols().map(str::to_string).collect()
}

impl GameConfig {
    /// Creates a configuration with the default marks.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            marks: default_marks(),
        }
    }

    /// Replaces the marks, keeping their order as the turn order.
    #[instrument(skip(self, marks))]
    pub fn with_marks<I, S>(mut self, marks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marks = marks.into_iter().map(Into::into).collect();
        self
    }

    /// Parses a configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(size = config.size, marks = config.marks.len(), "Config loaded");
        Ok(config)
    }

    /// Validates the marks and builds the turn-ordered set.
    #[instrument(skip(self))]
    pub fn mark_set(&self) -> Result<MarkSet, ConfigError> {
        MarkSet::new(self.marks.iter().cloned())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_size())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
