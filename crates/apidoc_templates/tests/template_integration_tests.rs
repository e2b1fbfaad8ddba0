//! Integration tests for rendering whole documents with template sets.

use std::fs;

use apidoc_core::{DocumentAssembler, FragmentRenderer, RenderContext, TemplateKind};
use apidoc_spec::ApiReader;
use apidoc_templates::{TemplateError, TemplateLoader};
use tempfile::tempdir;

const WIDGETS: &str = r#"{
    "name": "Widgets",
    "base": ["http://api.example.com"],
    "license": "apache2",
    "resources": [
        {
            "name": "Widget",
            "path": "/widgets",
            "inputBindings": [
                {"id": "id", "name": "widgetId", "mode": "path", "type": "string"}
            ],
            "operations": [
                {
                    "name": "GetWidget",
                    "method": "GET",
                    "input": {
                        "params": [{"binding": "id", "optional": false, "description": "widget id"}]
                    },
                    "output": {"status": 200, "contentType": "application/json", "type": "Widget"},
                    "errors": [{"status": 404, "cause": "Unknown widget"}],
                    "requires": ["widget exists"],
                    "ensures": ["widget unchanged"]
                },
                {"name": "ListWidgets", "method": "GET"}
            ]
        }
    ]
}"#;

#[test]
fn test_builtin_operation_fragment() {
    let api = ApiReader::from_json_str(WIDGETS).unwrap();
    let renderer = TemplateLoader::builtin().unwrap();
    let document = DocumentAssembler::new(&renderer).assemble(&api).unwrap();
    let text = &document.text;

    assert!(text.starts_with("# Widgets"));
    assert!(text.contains("**get** `/widgets`"));
    assert!(text.contains("| `widgetId` | path | string | false | widget id |"));
    assert!(text.contains("Status: 200 OK"));
    assert!(text.contains("| 404 Not Found | Unknown widget |"));
    assert!(text.contains("curl -v http://api.example.com/widgets"));
    assert!(text.contains("- Requires: widget exists\n- Ensures: widget unchanged"));
    assert!(text.contains("<a id=\"widget-1\"></a>"));
    assert!(text.contains("[apache2](http://www.apache.org/licenses/LICENSE-2.0.html)"));

    // ListWidgets has no input, so only one parameter table is rendered.
    assert_eq!(text.matches("#### Input parameters").count(), 1);
    assert_eq!(text.matches("#### Conditions").count(), 1);
}

#[test]
fn test_builtin_rendering_is_idempotent() {
    let api = ApiReader::from_json_str(WIDGETS).unwrap();

    let first = DocumentAssembler::new(&TemplateLoader::builtin().unwrap())
        .assemble(&api)
        .unwrap();
    let second = DocumentAssembler::new(&TemplateLoader::builtin().unwrap())
        .assemble(&api)
        .unwrap();
    assert_eq!(first.text, second.text);
}

#[test]
fn test_custom_template_set_with_manifest() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    fs::create_dir(dir.join("parts")).unwrap();

    fs::write(
        dir.join("templates.yaml"),
        r#"
name: text
templates:
  header: header.txt
  resource: resource.txt
  operation: operation.txt
  resource_end: resource_end.txt
  footer: footer.txt
"#,
    )
    .unwrap();
    fs::write(dir.join("header.txt"), "<h1>{{ apiName }}</h1>").unwrap();
    fs::write(dir.join("resource.txt"), "<section id=\"{{ resourceName | kebab_case }}\">").unwrap();
    fs::write(
        dir.join("operation.txt"),
        r#"{% include "parts/params.tera" %}"#,
    )
    .unwrap();
    fs::write(
        dir.join("parts/params.tera"),
        "<h2>{{ httpMethod }} {{ path }}</h2>{% if inputParameters %}<ul>{% for p in inputParameters %}<li>{{ p.name }}:{{ p.mode }}</li>{% endfor %}</ul>{% endif %}",
    )
    .unwrap();
    fs::write(dir.join("resource_end.txt"), "</section>").unwrap();
    fs::write(dir.join("footer.txt"), "<footer>{{ license }}</footer>").unwrap();
    fs::write(dir.join("README.md"), "not a {{ template").unwrap();

    let renderer = TemplateLoader::new(dir).load().unwrap();
    assert_eq!(renderer.manifest().name, "text");

    let api = ApiReader::from_json_str(WIDGETS).unwrap();
    let document = DocumentAssembler::new(&renderer).assemble(&api).unwrap();

    assert_eq!(
        document.text,
        "<h1>Widgets</h1>\
         <section id=\"widget\">\
         <h2>get /widgets</h2><ul><li>widgetId:path</li></ul>\
         <h2>get /widgets</h2>\
         </section>\
         <footer>apache2</footer>"
    );
}

#[test]
fn test_missing_template_file_aborts_load() {
    let temp = tempdir().unwrap();
    for file in ["header.tera", "resource.tera", "operation.tera", "resource_end.tera"] {
        fs::write(temp.path().join(file), "x").unwrap();
    }

    match TemplateLoader::new(temp.path()).load() {
        Err(TemplateError::MissingTemplate { role, file }) => {
            assert_eq!(role, "footer");
            assert_eq!(file, "footer.tera");
        }
        other => panic!("expected MissingTemplate, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_evaluation_failure_surfaces_from_assembly() {
    let temp = tempdir().unwrap();
    for (file, body) in [
        ("header.tera", "{{ apiName }}"),
        ("resource.tera", ""),
        ("operation.tera", "{{ nonexistent }}"),
        ("resource_end.tera", ""),
        ("footer.tera", ""),
    ] {
        fs::write(temp.path().join(file), body).unwrap();
    }

    let renderer = TemplateLoader::new(temp.path()).load().unwrap();
    assert!(renderer
        .render(TemplateKind::Header, &RenderContext::new())
        .is_err());

    let api = ApiReader::from_json_str(WIDGETS).unwrap();
    let mut sink = Vec::new();
    let result = DocumentAssembler::new(&renderer).write_to(&api, &mut sink);
    assert!(result.is_err());
    assert!(sink.is_empty());
}
