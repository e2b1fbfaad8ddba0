//! Error types for the core module.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while assembling a document.
///
/// Resolution misses are not errors and never appear here.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Template {template} failed to render: {message}")]
    RenderFailed { template: String, message: String },

    #[error("Context value for key {key} could not be serialized: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
