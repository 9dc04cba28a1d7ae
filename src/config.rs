//! Game configuration, loadable from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use mnk_core::{Difficulty, MAX_ROWS, MIN_ROWS, Player as Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest number of columns accepted from configuration.
pub const MAX_COLS: usize = 100;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (M).
    #[serde(default = "default_size")]
    rows: usize,

    /// Number of columns (N).
    #[serde(default = "default_size")]
    cols: usize,

    /// Marks in a row needed to win (K).
    #[serde(default = "default_size")]
    k: usize,

    /// Mark played by the human.
    #[serde(default = "default_mark")]
    mark: Mark,

    /// Computer difficulty.
    #[serde(default)]
    difficulty: Difficulty,
}

fn default_size() -> usize {
    3
}

fn default_mark() -> Mark {
    Mark::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_size(),
            cols: default_size(),
            k: default_size(),
            mark: default_mark(),
            difficulty: Difficulty::default(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(rows: usize, cols: usize, k: usize, mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            rows,
            cols,
            k,
            mark,
            difficulty,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            rows = config.rows,
            cols = config.cols,
            k = config.k,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that the values describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(ConfigError::new(format!(
                "rows must be between {} and {}, got {}",
                MIN_ROWS, MAX_ROWS, self.rows
            )));
        }
        if !(1..=MAX_COLS).contains(&self.cols) {
            return Err(ConfigError::new(format!(
                "cols must be between 1 and {}, got {}",
                MAX_COLS, self.cols
            )));
        }
        if self.k == 0 {
            return Err(ConfigError::new("k must be at least 1".to_string()));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_classic_tic_tac_toe() {
        let config = GameConfig::default();
        assert_eq!((*config.rows(), *config.cols(), *config.k()), (3, 3, 3));
        assert_eq!(*config.mark(), Mark::X);
        assert_eq!(*config.difficulty(), Difficulty::Normal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 5\ncols = 6\nk = 4\ndifficulty = \"hard\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.rows(), 5);
        assert_eq!(*config.cols(), 6);
        assert_eq!(*config.k(), 4);
        assert_eq!(*config.mark(), Mark::X);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_from_file_reads_mark() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mark = \"O\"").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.mark(), Mark::O);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = \"many\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(GameConfig::new(1, 3, 3, Mark::X, Difficulty::Easy).validate().is_err());
        assert!(GameConfig::new(101, 3, 3, Mark::X, Difficulty::Easy).validate().is_err());
        assert!(GameConfig::new(3, 0, 3, Mark::X, Difficulty::Easy).validate().is_err());
        assert!(GameConfig::new(3, 3, 0, Mark::X, Difficulty::Easy).validate().is_err());
        assert!(GameConfig::new(2, 1, 1, Mark::O, Difficulty::Hard).validate().is_ok());
    }
}
