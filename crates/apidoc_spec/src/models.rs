//! Data models for API description documents.
//!
//! The model mirrors the on-disk description format: an [`Api`] owns its
//! [`Resource`]s and the global list of [`NamedTypeDef`]s, and each resource
//! owns its [`NamedInputBinding`]s and [`Operation`]s. Everything is read-only
//! once parsed.

use serde::{Deserialize, Deserializer, Serialize};

/// Root of an API description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<ApiVersion>,
    /// Base URLs, primary first.
    #[serde(default, deserialize_with = "one_or_many::vec")]
    pub base: Vec<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub data_types: Vec<NamedTypeDef>,
}

impl Api {
    /// Create an empty API with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The first declared base URL, if any.
    pub fn primary_base_url(&self) -> Option<&str> {
        self.base.first().map(String::as_str)
    }

    /// Total number of operations across all resources.
    pub fn operation_count(&self) -> usize {
        self.resources.iter().map(|r| r.operations.len()).sum()
    }

    pub fn with_base(mut self, url: impl Into<String>) -> Self {
        self.base.push(url.into());
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn with_data_type(mut self, data_type: NamedTypeDef) -> Self {
        self.data_types.push(data_type);
        self
    }
}

/// API version information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiVersion {
    pub id: String,
    #[serde(default)]
    pub strategy: Option<String>,
}

/// A named, path-addressed grouping of operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub input_bindings: Vec<NamedInputBinding>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Resource {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_binding(mut self, binding: NamedInputBinding) -> Self {
        self.input_bindings.push(binding);
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Resource-scoped declaration of how a named value is transmitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedInputBinding {
    /// Join key referenced from a [`Parameter`].
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Transmission mode (header, query, path, ...). Opaque to the model.
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeSpec>,
}

impl NamedInputBinding {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mode: impl Into<String>,
        ty: impl Into<TypeSpec>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            mode: mode.into(),
            ty: Some(ty.into()),
        }
    }
}

/// One documented action on a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub method: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub input: Option<Input>,
    #[serde(default)]
    pub output: Option<Output>,
    #[serde(default)]
    pub errors: Vec<ErrorCase>,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub ensures: Vec<String>,
}

impl Operation {
    pub fn new(name: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_input(mut self, input: Input) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// Add a precondition.
    pub fn with_requirement(mut self, condition: impl Into<String>) -> Self {
        self.requires.push(condition.into());
        self
    }

    /// Add a postcondition.
    pub fn with_guarantee(mut self, condition: impl Into<String>) -> Self {
        self.ensures.push(condition.into());
        self
    }

    pub fn with_error(mut self, status: u16, cause: impl Into<String>) -> Self {
        self.errors.push(ErrorCase {
            status,
            cause: cause.into(),
        });
        self
    }
}

/// Input specification of an operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(rename = "type", default)]
    pub ty: Option<TypeSpec>,
    #[serde(default)]
    pub params: Option<Vec<Parameter>>,
    #[serde(default, deserialize_with = "one_or_many::option")]
    pub content_type: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Input {
    /// Name of the referenced type definition, if the input declares one by name.
    pub fn type_reference(&self) -> Option<&str> {
        self.ty.as_ref().and_then(TypeSpec::reference_name)
    }

    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.ty = Some(TypeSpec::Name(name.into()));
        self
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.get_or_insert_with(Vec::new).push(param);
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type
            .get_or_insert_with(Vec::new)
            .push(content_type.into());
        self
    }
}

/// A declared input parameter.
///
/// Only parameters referencing a resource binding by id are documented. A
/// `name` without a `binding` marks a parameter declared inline, which has no
/// binding to join against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub binding: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

/// How a [`Parameter`] refers to its binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterBinding<'a> {
    /// Reference to a [`NamedInputBinding`] id on the owning resource.
    Reference(&'a str),
    /// Named on the parameter itself, without a binding reference.
    Inline(&'a str),
    /// Neither a reference nor a name.
    Unbound,
}

impl Parameter {
    /// Parameter referencing a resource binding by id.
    pub fn reference(binding: impl Into<String>) -> Self {
        Self {
            binding: Some(binding.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Classify how this parameter is bound. A `binding` key takes precedence
    /// over inline attributes.
    pub fn binding(&self) -> ParameterBinding<'_> {
        match (&self.binding, &self.name) {
            (Some(id), _) => ParameterBinding::Reference(id),
            (None, Some(name)) => ParameterBinding::Inline(name),
            (None, None) => ParameterBinding::Unbound,
        }
    }
}

/// Output specification of an operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default, deserialize_with = "one_or_many::vec")]
    pub content_type: Vec<String>,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeSpec>,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub headers: Vec<Header>,
}

impl Output {
    pub fn new(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Response header declared on an output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeSpec>,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A declared error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCase {
    pub status: u16,
    pub cause: String,
}

/// A globally declared structural type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedTypeDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl NamedTypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Anonymous structural type declared inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
}

/// A field of a type definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeSpec>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeSpec>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// A type as written in the description: either a name (`string`,
/// `list(Widget)`, `Widget`) or an inline structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Name(String),
    Inline(Box<TypeDef>),
}

impl TypeSpec {
    /// The type name, when the type is referenced by name.
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Inline(_) => None,
        }
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<TypeDef> for TypeSpec {
    fn from(def: TypeDef) -> Self {
        Self::Inline(Box::new(def))
    }
}

/// Accepts either a single string or a list of strings.
mod one_or_many {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    impl From<OneOrMany> for Vec<String> {
        fn from(value: OneOrMany) -> Self {
            match value {
                OneOrMany::One(s) => vec![s],
                OneOrMany::Many(v) => v,
            }
        }
    }

    pub fn vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(Option::<OneOrMany>::deserialize(deserializer)?
            .map(Vec::from)
            .unwrap_or_default())
    }

    pub fn option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(Vec::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_accepts_string_or_list() {
        let api: Api = serde_json::from_str(r#"{"name": "a", "base": "http://x"}"#).unwrap();
        assert_eq!(api.base, vec!["http://x"]);

        let api: Api =
            serde_json::from_str(r#"{"name": "a", "base": ["http://x", "http://y"]}"#).unwrap();
        assert_eq!(api.primary_base_url(), Some("http://x"));
        assert_eq!(api.base.len(), 2);
    }

    #[test]
    fn test_content_type_absent_vs_present() {
        let input: Input = serde_json::from_str(r#"{"type": "Widget"}"#).unwrap();
        assert!(input.content_type.is_none());
        assert_eq!(input.type_reference(), Some("Widget"));

        let input: Input =
            serde_json::from_str(r#"{"contentType": "application/json"}"#).unwrap();
        assert_eq!(
            input.content_type,
            Some(vec!["application/json".to_string()])
        );
        assert!(input.type_reference().is_none());
    }

    #[test]
    fn test_inline_type_is_not_a_reference() {
        let input: Input = serde_json::from_str(
            r#"{"type": {"fields": [{"name": "a", "type": "string"}]}}"#,
        )
        .unwrap();
        assert!(matches!(input.ty, Some(TypeSpec::Inline(_))));
        assert!(input.type_reference().is_none());
    }

    #[test]
    fn test_parameter_binding_classification() {
        let p: Parameter = serde_json::from_str(r#"{"binding": "id"}"#).unwrap();
        assert_eq!(p.binding(), ParameterBinding::Reference("id"));

        let p: Parameter =
            serde_json::from_str(r#"{"name": "q", "mode": "query", "type": "string"}"#).unwrap();
        assert_eq!(p.binding(), ParameterBinding::Inline("q"));

        let p: Parameter = serde_json::from_str(r#"{"description": "orphan"}"#).unwrap();
        assert_eq!(p.binding(), ParameterBinding::Unbound);
    }

    #[test]
    fn test_type_spec_serializes_untagged() {
        let named = serde_json::to_value(TypeSpec::from("string")).unwrap();
        assert_eq!(named, serde_json::json!("string"));

        let inline = serde_json::to_value(TypeSpec::from(TypeDef {
            description: None,
            fields: vec![Field::new("a", "int")],
            constraints: Vec::new(),
        }))
        .unwrap();
        assert_eq!(inline["fields"][0]["name"], "a");
    }
}
