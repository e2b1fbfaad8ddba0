//! Template set manifest.
//!
//! A template directory may carry a `templates.yaml` naming the file used for
//! each of the five document templates. Every entry is optional and falls
//! back to the conventional file name.

use serde::{Deserialize, Serialize};

use apidoc_core::TemplateKind;

/// Manifest file names, in lookup order.
pub const MANIFEST_FILES: [&str; 2] = ["templates.yaml", "templates.yml"];

/// Description of a template set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSetManifest {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub templates: TemplateFiles,
}

fn default_name() -> String {
    "custom".to_string()
}

impl Default for TemplateSetManifest {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
            templates: TemplateFiles::default(),
        }
    }
}

/// Template file per document role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateFiles {
    pub header: String,
    pub resource: String,
    pub operation: String,
    pub resource_end: String,
    pub footer: String,
}

impl Default for TemplateFiles {
    fn default() -> Self {
        Self {
            header: "header.tera".to_string(),
            resource: "resource.tera".to_string(),
            operation: "operation.tera".to_string(),
            resource_end: "resource_end.tera".to_string(),
            footer: "footer.tera".to_string(),
        }
    }
}

impl TemplateFiles {
    /// The file registered for a template role.
    pub fn file_for(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Header => &self.header,
            TemplateKind::Resource => &self.resource,
            TemplateKind::Operation => &self.operation,
            TemplateKind::ResourceEnd => &self.resource_end,
            TemplateKind::Footer => &self.footer,
        }
    }

    /// Whether a file name is one of the role templates.
    pub fn contains(&self, file: &str) -> bool {
        TemplateKind::ALL.iter().any(|kind| self.file_for(*kind) == file)
    }
}
