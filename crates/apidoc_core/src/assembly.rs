//! Document assembly.
//!
//! Drives the single rendering pass: header, then for every resource the
//! resource-open fragment, one fragment per operation and the resource-close
//! fragment, then the footer. The renderer is supplied by the caller.

use std::fmt;
use std::io::Write;

use tracing::{debug, info};

use apidoc_spec::Api;

use crate::context::{
    build_api_context, build_footer_context, build_operation_context, build_resource_context,
    build_resource_end_context, RenderContext,
};
use crate::error::CoreResult;
use crate::resolver::ResolutionMiss;

/// The five templates a document is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Header,
    Resource,
    Operation,
    ResourceEnd,
    Footer,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        Self::Header,
        Self::Resource,
        Self::Operation,
        Self::ResourceEnd,
        Self::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Resource => "resource",
            Self::Operation => "operation",
            Self::ResourceEnd => "resourceEnd",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders one context with one of the named templates.
#[cfg_attr(test, mockall::automock)]
pub trait FragmentRenderer {
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> CoreResult<String>;
}

/// Summary of an assembled document.
#[derive(Debug, Clone, Default)]
pub struct AssemblyReport {
    pub resources: usize,
    pub operations: usize,
    pub misses: Vec<ResolutionMiss>,
}

/// A fully rendered document.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub report: AssemblyReport,
}

/// Assembles documents from an API description with a fragment renderer.
pub struct DocumentAssembler<'r, R: ?Sized> {
    renderer: &'r R,
}

impl<'r, R: FragmentRenderer + ?Sized> DocumentAssembler<'r, R> {
    pub fn new(renderer: &'r R) -> Self {
        Self { renderer }
    }

    /// Render the whole document into memory. Any render failure aborts the
    /// pass and no text is returned.
    pub fn assemble(&self, api: &Api) -> CoreResult<Document> {
        info!("Assembling documentation for {}", api.name);

        let mut text = String::new();
        let mut report = AssemblyReport::default();
        let base_url = api.primary_base_url();

        text.push_str(&self.render(TemplateKind::Header, &build_api_context(api)?)?);

        for resource in &api.resources {
            debug!("Rendering resource {} ({})", resource.name, resource.path);
            text.push_str(&self.render(TemplateKind::Resource, &build_resource_context(resource)?)?);

            for (ordinal, operation) in resource.operations.iter().enumerate() {
                let built = build_operation_context(
                    operation,
                    resource,
                    &api.data_types,
                    base_url,
                    ordinal,
                )?;
                text.push_str(&self.render(TemplateKind::Operation, &built.context)?);
                report.misses.extend(built.misses);
                report.operations += 1;
            }

            text.push_str(&self.render(TemplateKind::ResourceEnd, &build_resource_end_context())?);
            report.resources += 1;
        }

        text.push_str(&self.render(TemplateKind::Footer, &build_footer_context(api)?)?);

        info!(
            "Assembled {} resources and {} operations ({} unresolved references)",
            report.resources,
            report.operations,
            report.misses.len()
        );
        Ok(Document { text, report })
    }

    /// Render the whole document, then write it to `sink`. Nothing is written
    /// when rendering fails.
    pub fn write_to<W: Write>(&self, api: &Api, sink: &mut W) -> CoreResult<AssemblyReport> {
        let document = self.assemble(api)?;
        sink.write_all(document.text.as_bytes())?;
        sink.flush()?;
        Ok(document.report)
    }

    fn render(&self, kind: TemplateKind, context: &RenderContext) -> CoreResult<String> {
        debug!("Rendering {} template", kind);
        self.renderer.render(kind, context)
    }
}
