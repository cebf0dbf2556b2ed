//! Match configuration
//!
//! Loaded from an optional TOML file and then overridden by command-line
//! flags. Every field has a default, so an empty file is a valid config.

use crate::core::error::{Result, SiegeError};
use crate::core::types::{PlayerClass, Race};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default tracing filter when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_FILTER: &str = "strongholds=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for the computer's random choices
    ///
    /// `None` draws from OS entropy, so every match plays out differently.
    pub seed: Option<u64>,

    /// Fixed class for the computer side (random when unset)
    pub computer_class: Option<PlayerClass>,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            computer_class: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl MatchConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(class) = self.computer_class {
            if !class.is_playable() {
                return Err(SiegeError::Config(
                    "computer_class must be warrior, mage or rogue".into(),
                ));
            }
        }

        if self.log_filter.trim().is_empty() {
            return Err(SiegeError::Config("log_filter must not be empty".into()));
        }

        Ok(())
    }
}

/// Race named on the command line or in a config file
pub fn parse_race(name: &str) -> Result<Race> {
    Race::from_name(name).ok_or_else(|| SiegeError::Config(format!("unknown race '{}'", name)))
}

/// Playable class named on the command line or in a config file
pub fn parse_class(name: &str) -> Result<PlayerClass> {
    match PlayerClass::from_name(name) {
        PlayerClass::Unknown => Err(SiegeError::Config(format!(
            "unknown class '{}' (expected warrior, mage or rogue)",
            name
        ))),
        class => Ok(class),
    }
}

/// Parse and validate a config from TOML text
pub fn parse_config(contents: &str) -> Result<MatchConfig> {
    let config: MatchConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file
pub fn load_config(path: &Path) -> Result<MatchConfig> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    tracing::debug!("Loaded match config from {:?}", path);
    Ok(config)
}
