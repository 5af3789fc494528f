//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tic_tic_boom_core::{Cell, Symbol};
use tracing::{debug, info, instrument};

/// Display and logging settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Glyph drawn for an empty cell.
    #[serde(default = "default_empty_glyph")]
    empty_glyph: String,

    /// Glyph drawn for an O mark.
    #[serde(default = "default_o_glyph")]
    o_glyph: String,

    /// Glyph drawn for an X mark.
    #[serde(default = "default_x_glyph")]
    x_glyph: String,

    /// Print each symbol's live marks, oldest first, under the board.
    #[serde(default = "default_show_history")]
    show_history: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_empty_glyph() -> String {
    ".".to_string()
}

fn default_o_glyph() -> String {
    "O".to_string()
}

fn default_x_glyph() -> String {
    "X".to_string()
}

fn default_show_history() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            empty_glyph: default_empty_glyph(),
            o_glyph: default_o_glyph(),
            x_glyph: default_x_glyph(),
            show_history: default_show_history(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or returns defaults when no path is given.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %settings.log_filter, "Settings loaded");
        Ok(settings)
    }

    /// Glyph for a symbol's mark.
    pub fn glyph_for(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::O => &self.o_glyph,
            Symbol::X => &self.x_glyph,
        }
    }

    /// Glyph for a cell.
    pub fn cell_glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty_glyph,
            Cell::Occupied(symbol) => self.glyph_for(symbol),
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
