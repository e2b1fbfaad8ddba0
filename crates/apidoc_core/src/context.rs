//! Render contexts for the header, resources, operations and footer.
//!
//! Each builder is a pure mapping from the document model to a flat
//! key/value [`RenderContext`]. Key names are part of the template contract
//! and live in [`keys`].

use serde::Serialize;
use serde_json::{Map, Value};

use apidoc_spec::{Api, NamedTypeDef, Operation, Resource};

use crate::annotations::{curl_command, license_url, status_label, status_text};
use crate::error::{CoreError, CoreResult};
use crate::resolver::{resolve, ResolutionMiss};

/// Context keys exposed to templates.
pub mod keys {
    pub const API_NAME: &str = "apiName";
    pub const API_DESCRIPTION: &str = "apiDescription";
    pub const API_VERSION: &str = "apiVersion";
    pub const CATEGORIES: &str = "categories";
    pub const TAGS: &str = "tags";
    pub const RESOURCES: &str = "resources";

    pub const RESOURCE_NAME: &str = "resourceName";
    pub const PATH: &str = "path";
    pub const INPUT_BINDINGS: &str = "inputBindings";

    pub const OPERATION_NAME: &str = "operationName";
    pub const DESCRIPTION: &str = "description";
    pub const ERRORS: &str = "errors";
    pub const HTTP_METHOD: &str = "httpMethod";
    pub const INPUT: &str = "input";
    pub const OUTPUT: &str = "output";
    pub const OUTPUT_STATUS: &str = "outputStatus";
    pub const NUMBER: &str = "number";
    pub const BASE_URL: &str = "baseUrl";
    pub const CURL_COMMAND: &str = "curlCommand";
    pub const INPUT_PARAMETERS: &str = "inputParameters";
    pub const REQUIRES: &str = "requires";
    pub const ENSURES: &str = "ensures";

    pub const BASE_URLS: &str = "baseUrls";
    pub const LICENSE: &str = "license";
    pub const LICENSE_URL: &str = "licenseUrl";
    pub const COMMUNITY: &str = "community";
}

/// Flat key/value mapping handed to the template renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a serializable value under `key`, replacing any previous value.
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> CoreResult<()> {
        let value = serde_json::to_value(value).map_err(|source| CoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// The context as a JSON object.
    pub fn as_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

/// Operation context together with the references that failed to resolve.
#[derive(Debug, Clone)]
pub struct OperationContext {
    pub context: RenderContext,
    pub misses: Vec<ResolutionMiss>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationSummary<'a> {
    name: &'a str,
    http_method: String,
    number: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSummary<'a> {
    name: &'a str,
    path: &'a str,
    operations: Vec<OperationSummary<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorView<'a> {
    status: u16,
    cause: &'a str,
    status_text: Option<&'static str>,
}

/// Header context.
pub fn build_api_context(api: &Api) -> CoreResult<RenderContext> {
    let resources: Vec<ResourceSummary<'_>> = api
        .resources
        .iter()
        .map(|resource| ResourceSummary {
            name: &resource.name,
            path: &resource.path,
            operations: resource
                .operations
                .iter()
                .enumerate()
                .map(|(number, operation)| OperationSummary {
                    name: &operation.name,
                    http_method: operation.method.to_lowercase(),
                    number,
                })
                .collect(),
        })
        .collect();

    let mut ctx = RenderContext::new();
    ctx.insert(keys::API_NAME, &api.name)?;
    ctx.insert(keys::API_DESCRIPTION, &api.description)?;
    ctx.insert(
        keys::API_VERSION,
        &api.version.as_ref().map(|v| v.id.as_str()),
    )?;
    ctx.insert(keys::CATEGORIES, &api.categories)?;
    ctx.insert(keys::TAGS, &api.tags)?;
    ctx.insert(keys::RESOURCES, &resources)?;
    Ok(ctx)
}

/// Footer context.
pub fn build_footer_context(api: &Api) -> CoreResult<RenderContext> {
    let mut ctx = RenderContext::new();
    ctx.insert(keys::BASE_URLS, &api.base)?;
    ctx.insert(keys::LICENSE, &api.license)?;
    ctx.insert(
        keys::LICENSE_URL,
        &api.license.as_deref().and_then(license_url),
    )?;
    ctx.insert(keys::COMMUNITY, &api.community)?;
    Ok(ctx)
}

/// Resource-open context.
pub fn build_resource_context(resource: &Resource) -> CoreResult<RenderContext> {
    let mut ctx = RenderContext::new();
    ctx.insert(keys::RESOURCE_NAME, &resource.name)?;
    ctx.insert(keys::PATH, &resource.path)?;
    ctx.insert(keys::INPUT_BINDINGS, &resource.input_bindings)?;
    Ok(ctx)
}

/// Resource-close context. Carries no values.
pub fn build_resource_end_context() -> RenderContext {
    RenderContext::new()
}

/// Operation context. `ordinal` numbers operations within their resource
/// starting at zero.
pub fn build_operation_context(
    operation: &Operation,
    resource: &Resource,
    type_defs: &[NamedTypeDef],
    base_url: Option<&str>,
    ordinal: usize,
) -> CoreResult<OperationContext> {
    let errors: Vec<ErrorView<'_>> = operation
        .errors
        .iter()
        .map(|e| ErrorView {
            status: e.status,
            cause: &e.cause,
            status_text: status_text(e.status),
        })
        .collect();

    let mut ctx = RenderContext::new();
    ctx.insert(keys::OPERATION_NAME, &operation.name)?;
    ctx.insert(keys::RESOURCE_NAME, &resource.name)?;
    ctx.insert(keys::DESCRIPTION, &operation.description)?;
    ctx.insert(keys::PATH, &resource.path)?;
    ctx.insert(keys::ERRORS, &errors)?;
    ctx.insert(keys::HTTP_METHOD, &operation.method.to_lowercase())?;
    ctx.insert(keys::INPUT, &operation.input)?;
    ctx.insert(keys::NUMBER, &ordinal)?;
    ctx.insert(keys::BASE_URL, &base_url)?;
    ctx.insert(keys::OUTPUT, &operation.output)?;
    ctx.insert(keys::REQUIRES, &operation.requires)?;
    ctx.insert(keys::ENSURES, &operation.ensures)?;
    ctx.insert(
        keys::OUTPUT_STATUS,
        &operation
            .output
            .as_ref()
            .and_then(|o| o.status)
            .map(status_label),
    )?;
    ctx.insert(
        keys::CURL_COMMAND,
        &base_url.map(|url| curl_command(operation, resource, url)),
    )?;

    let resolution = resolve(operation, &resource.input_bindings, type_defs);
    if !resolution.parameters.is_empty() {
        ctx.insert(keys::INPUT_PARAMETERS, &resolution.parameters)?;
    }

    Ok(OperationContext {
        context: ctx,
        misses: resolution.misses,
    })
}
