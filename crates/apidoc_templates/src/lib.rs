//! # apidoc_templates
//!
//! Template sets and Tera rendering for apidoc.
//!
//! A template set provides the five document templates (header, resource,
//! operation, resource end, footer). Sets are loaded from a directory, with
//! an optional `templates.yaml` manifest, or taken from the built-in
//! Markdown set. Templates can use these filters on top of Tera's own:
//!
//! - `kebab_case`, `snake_case`, `pascal_case`, `camel_case`
//! - `type_label`: readable form of a named or inline type
//!
//! ## Example
//!
//! ```rust,no_run
//! use apidoc_core::DocumentAssembler;
//! use apidoc_spec::ApiReader;
//! use apidoc_templates::TemplateLoader;
//!
//! let api = ApiReader::read_file("api.json").unwrap();
//! let renderer = TemplateLoader::new("templates/html").load().unwrap();
//! let document = DocumentAssembler::new(&renderer).assemble(&api).unwrap();
//! println!("{}", document.text);
//! ```

pub mod error;
mod filters;
pub mod loader;
pub mod manifest;
pub mod renderer;

pub use error::{TemplateError, TemplateResult};
pub use loader::TemplateLoader;
pub use manifest::{TemplateFiles, TemplateSetManifest, MANIFEST_FILES};
pub use renderer::TemplateRenderer;
