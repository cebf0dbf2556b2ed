use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiegeError {
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Invalid selection {input:?}: expected a number from 1 to {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("Input closed while waiting for a selection")]
    InputClosed,

    #[error("Target index {index} out of range ({available} available)")]
    InvalidTarget { index: usize, available: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiegeError>;
