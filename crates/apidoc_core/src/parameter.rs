//! Render-ready input parameter descriptor.

use serde::Serialize;

use apidoc_spec::{Field, NamedInputBinding, Parameter, TypeSpec};

/// One input parameter as shown in the documentation.
///
/// Built either from a [`Field`] of the input's type definition or from a
/// [`Parameter`] joined with the resource binding it references. Both paths
/// fill the same slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputParameter {
    pub name: String,
    /// Transmission mode. Empty for field-derived parameters.
    pub mode: String,
    #[serde(rename = "type")]
    pub ty: Option<TypeSpec>,
    pub description: Option<String>,
    pub optional: bool,
    /// Content types of the owning input. `None` for binding-derived parameters.
    pub content_type: Option<Vec<String>>,
}

impl InputParameter {
    /// Parameter derived from a type-definition field.
    pub fn from_field(field: &Field, content_type: Option<&[String]>) -> Self {
        Self {
            name: field.name.clone(),
            mode: String::new(),
            ty: field.ty.clone(),
            description: field.description.clone(),
            optional: field.optional,
            content_type: content_type.map(<[String]>::to_vec),
        }
    }

    /// Parameter derived from a declared parameter and its resource binding.
    pub fn from_binding(binding: &NamedInputBinding, parameter: &Parameter) -> Self {
        Self {
            name: binding.name.clone(),
            mode: binding.mode.clone(),
            ty: binding.ty.clone(),
            description: parameter.description.clone(),
            optional: parameter.optional,
            content_type: None,
        }
    }
}
