//! # apidoc_spec
//!
//! In-memory model of an API description document and the reader that
//! produces it.
//!
//! A description lists resources (each with named input bindings and
//! operations) and a global set of named data types. Documents are accepted
//! as JSON or YAML.
//!
//! ## Example
//!
//! ```rust,no_run
//! use apidoc_spec::ApiReader;
//!
//! let api = ApiReader::read_file("starbucks.json").unwrap();
//! for resource in &api.resources {
//!     println!("{} {}", resource.name, resource.path);
//! }
//! ```

pub mod error;
pub mod models;
pub mod reader;

pub use error::{SpecError, SpecResult};
pub use models::*;
pub use reader::{ApiReader, DocumentFormat};
