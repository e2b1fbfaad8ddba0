//! Input parameter resolution.
//!
//! Joins an operation's input declaration against the owning resource's bindings and
//! the API's type definitions. Type-derived parameters come first, in field
//! order, followed by binding-derived parameters in declaration order. A
//! reference that cannot be resolved produces no entry; it is recorded as a
//! [`ResolutionMiss`] but never fails the run.

use std::fmt;

use tracing::debug;

use apidoc_spec::{NamedInputBinding, NamedTypeDef, Operation, ParameterBinding};

use crate::parameter::InputParameter;

/// A reference in the input declaration that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionMiss {
    /// The input's type reference names no type definition.
    UnknownType { operation: String, name: String },
    /// A parameter references a binding id the resource does not declare.
    UnknownBinding { operation: String, id: String },
    /// A parameter is named inline instead of referencing a binding.
    InlineBinding { operation: String, name: String },
    /// A parameter has neither a binding reference nor a name.
    UnboundParameter { operation: String, index: usize },
}

impl fmt::Display for ResolutionMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType { operation, name } => {
                write!(f, "{}: input type {} is not defined", operation, name)
            }
            Self::UnknownBinding { operation, id } => {
                write!(f, "{}: no input binding with id {}", operation, id)
            }
            Self::InlineBinding { operation, name } => {
                write!(f, "{}: parameter {} has no binding reference", operation, name)
            }
            Self::UnboundParameter { operation, index } => {
                write!(f, "{}: parameter #{} has no binding", operation, index)
            }
        }
    }
}

/// Outcome of resolving one operation's input parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub parameters: Vec<InputParameter>,
    pub misses: Vec<ResolutionMiss>,
}

/// Resolve the ordered input parameters of an operation.
pub fn resolve(
    operation: &Operation,
    bindings: &[NamedInputBinding],
    type_defs: &[NamedTypeDef],
) -> Resolution {
    let mut resolution = Resolution::default();

    let Some(input) = operation.input.as_ref() else {
        return resolution;
    };

    if let Some(name) = input.type_reference() {
        match find_type_def(type_defs, name) {
            Some(type_def) => {
                let content_type = input.content_type.as_deref();
                resolution.parameters.extend(
                    type_def
                        .fields
                        .iter()
                        .map(|field| InputParameter::from_field(field, content_type)),
                );
            }
            None => resolution.misses.push(ResolutionMiss::UnknownType {
                operation: operation.name.clone(),
                name: name.to_string(),
            }),
        }
    }

    for (index, parameter) in input.params.iter().flatten().enumerate() {
        match parameter.binding() {
            ParameterBinding::Reference(id) => match find_binding(bindings, id) {
                Some(binding) => resolution
                    .parameters
                    .push(InputParameter::from_binding(binding, parameter)),
                None => resolution.misses.push(ResolutionMiss::UnknownBinding {
                    operation: operation.name.clone(),
                    id: id.to_string(),
                }),
            },
            ParameterBinding::Inline(name) => {
                resolution.misses.push(ResolutionMiss::InlineBinding {
                    operation: operation.name.clone(),
                    name: name.to_string(),
                })
            }
            ParameterBinding::Unbound => {
                resolution.misses.push(ResolutionMiss::UnboundParameter {
                    operation: operation.name.clone(),
                    index,
                })
            }
        }
    }

    for miss in &resolution.misses {
        debug!("Unresolved input reference: {}", miss);
    }

    resolution
}

/// Resolve the ordered input parameters of an operation, discarding misses.
pub fn resolve_input_parameters(
    operation: &Operation,
    bindings: &[NamedInputBinding],
    type_defs: &[NamedTypeDef],
) -> Vec<InputParameter> {
    resolve(operation, bindings, type_defs).parameters
}

/// First type definition with the given name.
fn find_type_def<'a>(type_defs: &'a [NamedTypeDef], name: &str) -> Option<&'a NamedTypeDef> {
    type_defs.iter().find(|t| t.name == name)
}

/// First binding with the given id. Bindings without an id never match.
fn find_binding<'a>(bindings: &'a [NamedInputBinding], id: &str) -> Option<&'a NamedInputBinding> {
    bindings.iter().find(|b| b.id.as_deref() == Some(id))
}
