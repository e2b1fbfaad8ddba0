//! Tera-backed fragment rendering.

use std::error::Error as _;

use tera::{Context, Tera};
use tracing::debug;

use apidoc_core::{CoreError, CoreResult, FragmentRenderer, RenderContext, TemplateKind};

use crate::error::{TemplateError, TemplateResult};
use crate::filters;
use crate::manifest::TemplateSetManifest;

/// Renders document fragments from a parsed template set.
///
/// All templates are parsed once on construction and reused for every
/// fragment of every document.
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
    manifest: TemplateSetManifest,
}

impl TemplateRenderer {
    /// Build a renderer from `(name, source)` pairs. Every template named by
    /// the manifest must be among them.
    pub fn from_sources(
        manifest: TemplateSetManifest,
        sources: Vec<(String, String)>,
    ) -> TemplateResult<Self> {
        let mut tera = Tera::default();
        filters::register(&mut tera);
        tera.add_raw_templates(sources)
            .map_err(TemplateError::Parse)?;

        for kind in TemplateKind::ALL {
            let file = manifest.templates.file_for(kind);
            if !tera.get_template_names().any(|name| name == file) {
                return Err(TemplateError::MissingTemplate {
                    role: kind.to_string(),
                    file: file.to_string(),
                });
            }
        }

        debug!(
            "Template set {} ready ({} templates)",
            manifest.name,
            tera.get_template_names().count()
        );
        Ok(Self { tera, manifest })
    }

    pub fn manifest(&self) -> &TemplateSetManifest {
        &self.manifest
    }
}

impl FragmentRenderer for TemplateRenderer {
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> CoreResult<String> {
        let name = self.manifest.templates.file_for(kind);
        self.tera
            .render(name, &to_tera_context(name, context)?)
            .map_err(|e| render_failed(name, &e))
    }
}

fn to_tera_context(template: &str, context: &RenderContext) -> CoreResult<Context> {
    Context::from_serialize(context).map_err(|e| render_failed(template, &e))
}

/// Tera reports the useful detail in the source chain, so flatten it.
fn render_failed(template: &str, error: &tera::Error) -> CoreError {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    CoreError::RenderFailed {
        template: template.to_string(),
        message,
    }
}
