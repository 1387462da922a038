//! Console settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_rps::{DEFAULT_COMPUTER_NAME, DEFAULT_ROUNDS};
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Human player's name. Prompted for when absent.
    #[serde(default)]
    player_name: Option<String>,

    /// Computer opponent's name.
    #[serde(default = "default_opponent_name")]
    opponent_name: String,

    /// Rounds per session.
    #[serde(default = "default_rounds")]
    rounds: usize,
}

#[instrument]
fn default_opponent_name() -> String {
    DEFAULT_COMPUTER_NAME.to_string()
}

#[instrument]
fn default_rounds() -> usize {
    DEFAULT_ROUNDS
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            opponent_name: default_opponent_name(),
            rounds: default_rounds(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(rounds = config.rounds, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_name: Option<String>,
        rounds: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = player_name {
            self.player_name = Some(name);
        }
        if let Some(rounds) = rounds {
            self.rounds = rounds;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::new("rounds must be positive".to_string()));
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
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = ConsoleConfig::load_or_default(dir.path().join("absent.toml"))
            .expect("Defaults");
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.rounds(), &10);
        assert_eq!(config.opponent_name(), "Computer");
        assert!(config.player_name().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("rps.toml");
        fs::write(&path, "player_name = \"Alice\"\nrounds = 3\n").expect("Write failed");

        let config = ConsoleConfig::from_file(&path).expect("Valid config");
        assert_eq!(config.player_name().as_deref(), Some("Alice"));
        assert_eq!(config.rounds(), &3);
        assert_eq!(config.opponent_name(), "Computer");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

        let err = ConsoleConfig::from_file(&path).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("zero.toml");
        fs::write(&path, "rounds = 0\n").expect("Write failed");

        assert!(ConsoleConfig::from_file(&path).is_err());
        assert!(
            ConsoleConfig::default()
                .with_overrides(None, Some(0))
                .is_err()
        );
    }

    #[test]
    fn test_overrides_win() {
        let config = ConsoleConfig::default()
            .with_overrides(Some("Bob".to_string()), Some(5))
            .expect("Valid overrides");
        assert_eq!(config.player_name().as_deref(), Some("Bob"));
        assert_eq!(config.rounds(), &5);
    }
}
