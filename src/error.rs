//! Errors raised by path generation and its configuration layer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathGenError {
    /// Construction parameters that cannot produce an ensemble.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("failed to serialize: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PathGenError>;
