//! Error types for reading API descriptions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while reading an API description.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("API description not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Invalid API description in file {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
