//! Error types for reload-identity
//!
//! Extraction failures never reach this type: they shorten a generation
//! instead. What remains are setup errors and downstream hand-off failures.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Metrics registration error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// A downstream collaborator rejected part of a reload plan
    #[error("Downstream {stage} failed for {owner}: {message}")]
    Downstream {
        stage: &'static str,
        owner: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReloadError {
    pub fn downstream(stage: &'static str, owner: &str, message: impl Into<String>) -> Self {
        ReloadError::Downstream {
            stage,
            owner: owner.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReloadError>;
