//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while loading a template set.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Template set has no {role} template (expected {file})")]
    MissingTemplate { role: String, file: String },

    #[error("Template parsing failed: {0}")]
    Parse(#[source] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
