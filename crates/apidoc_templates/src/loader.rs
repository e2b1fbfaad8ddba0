//! Template set loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};
use crate::manifest::{TemplateSetManifest, MANIFEST_FILES};
use crate::renderer::TemplateRenderer;

const BUILTIN_MARKDOWN: [(&str, &str); 6] = [
    ("header.tera", include_str!("../templates/markdown/header.tera")),
    ("resource.tera", include_str!("../templates/markdown/resource.tera")),
    ("operation.tera", include_str!("../templates/markdown/operation.tera")),
    ("resource_end.tera", include_str!("../templates/markdown/resource_end.tera")),
    ("footer.tera", include_str!("../templates/markdown/footer.tera")),
    ("macros.tera", include_str!("../templates/markdown/macros.tera")),
];

/// Loader for template sets.
pub struct TemplateLoader {
    templates_path: PathBuf,
}

impl TemplateLoader {
    /// Create a loader for a template directory.
    pub fn new(templates_path: impl Into<PathBuf>) -> Self {
        Self {
            templates_path: templates_path.into(),
        }
    }

    /// The Markdown template set shipped with apidoc.
    pub fn builtin() -> TemplateResult<TemplateRenderer> {
        let manifest = TemplateSetManifest {
            name: "markdown".to_string(),
            description: Some("Built-in Markdown documentation".to_string()),
            ..Default::default()
        };
        let sources = BUILTIN_MARKDOWN
            .iter()
            .map(|(name, source)| (name.to_string(), source.to_string()))
            .collect();
        TemplateRenderer::from_sources(manifest, sources)
    }

    /// Load and parse the template set in the directory.
    ///
    /// Every `*.tera` file below the directory is registered under its
    /// relative path, so templates can include each other or import macros.
    /// Files named by the manifest are registered whatever their extension.
    pub fn load(&self) -> TemplateResult<TemplateRenderer> {
        if !self.templates_path.is_dir() {
            return Err(TemplateError::NotFound(self.templates_path.clone()));
        }

        let manifest = self.load_manifest()?;
        let mut sources = Vec::new();

        for entry in WalkDir::new(&self.templates_path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let name = self.template_name(entry.path());
            let is_tera = entry
                .path()
                .extension()
                .map_or(false, |ext| ext == "tera");

            if is_tera || manifest.templates.contains(&name) {
                debug!("Registering template {}", name);
                sources.push((name, fs::read_to_string(entry.path())?));
            }
        }

        info!(
            "Loaded template set {} from {:?}",
            manifest.name, self.templates_path
        );
        TemplateRenderer::from_sources(manifest, sources)
    }

    /// Read `templates.yaml` (or `templates.yml`); defaults when neither exists.
    fn load_manifest(&self) -> TemplateResult<TemplateSetManifest> {
        let Some(path) = MANIFEST_FILES
            .iter()
            .map(|file| self.templates_path.join(file))
            .find(|path| path.exists())
        else {
            debug!("No manifest in {:?}, using defaults", self.templates_path);
            return Ok(TemplateSetManifest::default());
        };

        debug!("Loading manifest from {:?}", path);
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| TemplateError::InvalidManifest {
            path,
            message: e.to_string(),
        })
    }

    /// Template name for a file: its path relative to the set, `/`-separated.
    fn template_name(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.templates_path).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
