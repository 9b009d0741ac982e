//! Error types for octocompose

use thiserror::Error;

/// Result type for octocompose operations
pub type Result<T> = std::result::Result<T, OperatorError>;

/// Operator error types
#[derive(Error, Debug)]
pub enum OperatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("YAML serialization error: {0}")]
    Serialization(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid project identifier: {0:?}")]
    InvalidProject(String),

    #[error("Cache directory unavailable: {0}")]
    CacheDir(String),

    #[error("Command error: {0}")]
    Command(String),
}

impl From<serde_json::Error> for OperatorError {
    fn from(err: serde_json::Error) -> Self {
        OperatorError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for OperatorError {
    fn from(err: serde_yaml::Error) -> Self {
        OperatorError::Serialization(err.to_string())
    }
}
