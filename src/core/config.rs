//! Game configuration
//!
//! Registration bounds and the dice seed live here so the interactive
//! driver and the headless runner share one source of tuning values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for a conquest session
///
/// The caps mirror what the registration prompts accept; the engine
/// itself assumes they hold and does not re-check them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the battle dice
    ///
    /// `None` draws a fresh seed at startup, so repeated sessions differ.
    /// Set it (or pass --seed) to replay a session deterministically.
    pub seed: Option<u64>,

    /// Maximum number of territories accepted at registration
    pub max_territories: usize,

    /// Maximum troop count accepted for one territory at registration
    pub max_troops: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_territories: 1000,
            max_troops: 1_000_000,
        }
    }
}

/// Error type for config loading and validation
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_territories == 0 {
            return Err(ConfigError::Invalid(
                "max_territories must be at least 1".into(),
            ));
        }
        if self.max_troops == 0 {
            return Err(ConfigError::Invalid("max_troops must be at least 1".into()));
        }
        Ok(())
    }
}
