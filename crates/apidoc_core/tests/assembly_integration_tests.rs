//! Integration tests for resolution and assembly through the public API.

use apidoc_core::{
    keys, CoreResult, DocumentAssembler, FragmentRenderer, RenderContext, ResolutionMiss,
    TemplateKind,
};
use apidoc_spec::ApiReader;

/// Renders every context as one JSON line prefixed with the template name.
struct JsonLines;

impl FragmentRenderer for JsonLines {
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> CoreResult<String> {
        Ok(format!("{} {}\n", kind, context.as_value()))
    }
}

const DESCRIPTION: &str = r#"{
    "name": "Library",
    "base": "https://library.example.org",
    "resources": [
        {
            "name": "Book",
            "path": "/books",
            "inputBindings": [
                {"id": "isbn", "name": "isbn", "mode": "path", "type": "string"},
                {"id": "lang", "name": "Accept-Language", "mode": "header", "type": "string"}
            ],
            "operations": [
                {
                    "name": "AddBook",
                    "method": "POST",
                    "input": {
                        "type": "Book",
                        "contentType": "application/json",
                        "params": [
                            {"binding": "lang", "optional": true},
                            {"binding": "unknown"}
                        ]
                    },
                    "output": {"status": 201}
                },
                {"name": "ListBooks", "method": "GET"}
            ]
        }
    ],
    "dataTypes": [
        {"name": "Book", "fields": [
            {"name": "title", "type": "string"},
            {"name": "authors", "type": "list(string)"}
        ]}
    ]
}"#;

fn operation_contexts(text: &str) -> Vec<serde_json::Value> {
    text.lines()
        .filter_map(|line| line.strip_prefix("operation "))
        .map(|json| serde_json::from_str(json).unwrap())
        .collect()
}

#[test]
fn test_operations_resolve_in_document_order() {
    let api = ApiReader::from_json_str(DESCRIPTION).unwrap();
    let document = DocumentAssembler::new(&JsonLines).assemble(&api).unwrap();

    let operations = operation_contexts(&document.text);
    assert_eq!(operations.len(), 2);

    let add = &operations[0];
    assert_eq!(add[keys::HTTP_METHOD], "post");
    assert_eq!(add[keys::NUMBER], 0);
    let params = add[keys::INPUT_PARAMETERS].as_array().unwrap();
    let names: Vec<_> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["title", "authors", "Accept-Language"]);
    assert_eq!(params[0]["mode"], "");
    assert_eq!(params[0]["contentType"], serde_json::json!(["application/json"]));
    assert_eq!(params[2]["optional"], true);
    assert!(params[2]["contentType"].is_null());

    let list = &operations[1];
    assert_eq!(list[keys::NUMBER], 1);
    assert!(list.get(keys::INPUT_PARAMETERS).is_none());

    assert_eq!(
        document.report.misses,
        vec![ResolutionMiss::UnknownBinding {
            operation: "AddBook".into(),
            id: "unknown".into()
        }]
    );
}

#[test]
fn test_document_structure() {
    let api = ApiReader::from_json_str(DESCRIPTION).unwrap();
    let document = DocumentAssembler::new(&JsonLines).assemble(&api).unwrap();

    let kinds: Vec<_> = document
        .text
        .lines()
        .map(|line| line.split(' ').next().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["header", "resource", "operation", "operation", "resourceEnd", "footer"]
    );
}

#[test]
fn test_assembly_is_idempotent() {
    let api = ApiReader::from_json_str(DESCRIPTION).unwrap();
    let assembler = DocumentAssembler::new(&JsonLines);

    let first = assembler.assemble(&api).unwrap();
    let second = assembler.assemble(&api).unwrap();
    assert_eq!(first.text, second.text);
}

#[test]
fn test_inline_parameter_without_binding_is_not_documented() {
    let api = ApiReader::from_json_str(
        r#"{
            "name": "Search",
            "resources": [{
                "name": "Query",
                "path": "/search",
                "operations": [{
                    "name": "Search",
                    "method": "GET",
                    "input": {"params": [{"name": "q", "mode": "query", "type": "string"}]}
                }]
            }]
        }"#,
    )
    .unwrap();
    let document = DocumentAssembler::new(&JsonLines).assemble(&api).unwrap();

    let operations = operation_contexts(&document.text);
    assert!(operations[0].get(keys::INPUT_PARAMETERS).is_none());
    assert_eq!(
        document.report.misses,
        vec![ResolutionMiss::InlineBinding {
            operation: "Search".into(),
            name: "q".into()
        }]
    );
}
