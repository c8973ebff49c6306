use std::io;

use thiserror::Error;

use crate::ConfigKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: ConfigKey, message: String },
}
