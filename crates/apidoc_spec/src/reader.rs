//! API description reading utilities.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{SpecError, SpecResult};
use crate::models::Api;

/// Serialization format of a description document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Reader for API description documents.
pub struct ApiReader;

impl ApiReader {
    /// Read and parse a description file.
    pub fn read_file(path: impl AsRef<Path>) -> SpecResult<Api> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }

        debug!("Reading API description from {:?}", path);
        let content = fs::read_to_string(path)?;

        let api = Self::parse(&content, DocumentFormat::from_path(path)).map_err(|e| {
            SpecError::InvalidFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        info!(
            "Loaded API {} ({} resources, {} operations, {} data types)",
            api.name,
            api.resources.len(),
            api.operation_count(),
            api.data_types.len()
        );
        Ok(api)
    }

    /// Parse description content in the given format.
    pub fn parse(content: &str, format: DocumentFormat) -> SpecResult<Api> {
        match format {
            DocumentFormat::Json => Self::from_json_str(content),
            DocumentFormat::Yaml => Self::from_yaml_str(content),
        }
    }

    /// Parse a JSON description.
    pub fn from_json_str(content: &str) -> SpecResult<Api> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a YAML description.
    pub fn from_yaml_str(content: &str) -> SpecResult<Api> {
        Ok(serde_yaml::from_str(content)?)
    }
}
