//! Custom Tera filters used by documentation templates.

use std::collections::HashMap;

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use tera::{Result, Tera, Value};

/// Register every apidoc filter on a Tera instance.
pub(crate) fn register(tera: &mut Tera) {
    tera.register_filter("kebab_case", kebab_case);
    tera.register_filter("snake_case", snake_case);
    tera.register_filter("pascal_case", pascal_case);
    tera.register_filter("camel_case", camel_case);
    tera.register_filter("type_label", type_label);
}

fn expect_str<'a>(value: &'a Value, filter: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{} filter expects a string", filter)))
}

pub(crate) fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(expect_str(value, "kebab_case")?.to_kebab_case()))
}

pub(crate) fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(expect_str(value, "snake_case")?.to_snake_case()))
}

pub(crate) fn pascal_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(expect_str(value, "pascal_case")?.to_pascal_case()))
}

pub(crate) fn camel_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(
        expect_str(value, "camel_case")?.to_lower_camel_case(),
    ))
}

/// Readable label for a type: names pass through, inline structures become
/// `{ field: type, ... }`, null becomes empty.
pub(crate) fn type_label(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(label(value)))
}

fn label(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(name) => name.clone(),
        Value::Object(map) => match map.get("fields").and_then(Value::as_array) {
            Some(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|field| {
                        let name = field.get("name").and_then(Value::as_str).unwrap_or("?");
                        let ty = field.get("type").map(label).unwrap_or_default();
                        format!("{}: {}", name, ty)
                    })
                    .collect();
                format!("{{ {} }}", parts.join(", "))
            }
            None => "object".to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply(filter: fn(&Value, &HashMap<String, Value>) -> Result<Value>, input: Value) -> String {
        let args = HashMap::new();
        filter(&input, &args).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_case_filters() {
        assert_eq!(apply(kebab_case, json!("OrderItem")), "order-item");
        assert_eq!(apply(snake_case, json!("OrderItem")), "order_item");
        assert_eq!(apply(pascal_case, json!("order_item")), "OrderItem");
        assert_eq!(apply(camel_case, json!("order-item")), "orderItem");
    }

    #[test]
    fn test_case_filter_rejects_non_string() {
        let args = HashMap::new();
        assert!(kebab_case(&json!(42), &args).is_err());
    }

    #[test]
    fn test_type_label() {
        assert_eq!(apply(type_label, json!("list(string)")), "list(string)");
        assert_eq!(apply(type_label, Value::Null), "");
        assert_eq!(
            apply(
                type_label,
                json!({"fields": [
                    {"name": "amount", "type": "double"},
                    {"name": "unit", "type": {"fields": [{"name": "code", "type": "string"}]}}
                ]})
            ),
            "{ amount: double, unit: { code: string } }"
        );
    }
}
