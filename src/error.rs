//! Error type for everything that touches the outside world.
//!
//! The scoring core never fails: out-of-range values are clamped. Errors
//! only come from reading inputs, configuration and the score store, and
//! from validating metrics before they reach the core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input or store file is not valid JSON for the expected shape.
    #[error("{}: invalid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file is not valid TOML for the expected shape.
    #[error("{}: invalid config: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A metric failed validation and was not handed to the scoring core.
    #[error("invalid metric for {item}: {reason}")]
    InvalidMetric { item: String, reason: String },

    #[error("failed to serialize scores: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetric {
            item: item.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
