//! # apidoc_core
//!
//! Parameter resolution and render-context assembly for apidoc.
//!
//! For every operation the resolver joins three parts of the description:
//! the operation's input declaration, the resource's named input bindings and the
//! API's named type definitions. The result is an ordered list of
//! [`InputParameter`]s that, together with the other operation attributes,
//! forms the operation's [`RenderContext`].
//!
//! # Architecture
//!
//! - **Resolver**: pure join producing input parameters and resolution misses
//! - **Context**: flat key/value contexts per header, resource, operation, footer
//! - **Assembly**: single ordered pass over the API through a [`FragmentRenderer`]
//!
//! # Example
//!
//! ```rust,ignore
//! use apidoc_core::{DocumentAssembler, FragmentRenderer};
//!
//! let renderer = MyRenderer::new();
//! let document = DocumentAssembler::new(&renderer).assemble(&api)?;
//! println!("{}", document.text);
//! ```

pub mod annotations;
pub mod assembly;
pub mod context;
pub mod error;
pub mod parameter;
pub mod resolver;

pub use assembly::{AssemblyReport, Document, DocumentAssembler, FragmentRenderer, TemplateKind};
pub use context::{
    build_api_context, build_footer_context, build_operation_context, build_resource_context,
    build_resource_end_context, keys, OperationContext, RenderContext,
};
pub use error::{CoreError, CoreResult};
pub use parameter::InputParameter;
pub use resolver::{resolve, resolve_input_parameters, Resolution, ResolutionMiss};
