//! Example values generated from JSON schemas

use serde_json::{Map, Value};

/// Builds representative example documents from flat object schemas
pub struct ExampleGenerator;

impl ExampleGenerator {
    /// Example object for `schema`
    ///
    /// Only `type: object` schemas with `properties` produce fields; anything
    /// else yields `{}`. Properties keep their declaration order.
    pub fn generate(schema: Option<&Value>) -> Value {
        let Some(properties) = schema.and_then(Self::object_properties) else {
            return Value::Object(Map::new());
        };

        let mut example = Map::new();
        for (name, property) in properties {
            if let Some(value) = Self::property_example(property) {
                example.insert(name.clone(), value);
            }
        }

        Value::Object(example)
    }

    /// `generate` pretty-printed with two-space indentation
    pub fn render(schema: Option<&Value>) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::generate(schema))
    }

    fn object_properties(schema: &Value) -> Option<&Map<String, Value>> {
        if schema.get("type").and_then(Value::as_str) != Some("object") {
            return None;
        }
        schema.get("properties").and_then(Value::as_object)
    }

    fn property_example(property: &Value) -> Option<Value> {
        let fields = property.as_object()?;

        if let Some(example) = fields.get("example") {
            return Some(example.clone());
        }

        match fields.get("type").and_then(Value::as_str)? {
            "string" => {
                let literal = match fields.get("format").and_then(Value::as_str) {
                    Some("email") => "example@email.com",
                    Some("date") => "2024-01-01",
                    Some("date-time") => "2024-01-01T00:00:00Z",
                    _ => "string",
                };
                Some(Value::from(literal))
            }
            "number" | "integer" => Some(Value::from(0)),
            "boolean" => Some(Value::Bool(false)),
            "array" => Some(Value::Array(Vec::new())),
            "object" => Some(Self::generate(Some(property))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_or_non_object_schema() {
        assert_eq!(ExampleGenerator::generate(None), json!({}));
        assert_eq!(ExampleGenerator::generate(Some(&json!({"type": "string"}))), json!({}));
        assert_eq!(ExampleGenerator::generate(Some(&json!({"type": "object"}))), json!({}));
        assert_eq!(
            ExampleGenerator::generate(Some(&json!({"properties": {"a": {"type": "string"}}}))),
            json!({})
        );
    }

    #[test]
    fn test_type_defaults() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "email": {"type": "string", "format": "email"},
                "birthday": {"type": "string", "format": "date"},
                "createdAt": {"type": "string", "format": "date-time"},
                "price": {"type": "number"},
                "quantity": {"type": "integer"},
                "active": {"type": "boolean"},
                "images": {"type": "array", "items": {"type": "string"}}
            }
        });

        assert_eq!(
            ExampleGenerator::generate(Some(&schema)),
            json!({
                "name": "string",
                "email": "example@email.com",
                "birthday": "2024-01-01",
                "createdAt": "2024-01-01T00:00:00Z",
                "price": 0,
                "quantity": 0,
                "active": false,
                "images": []
            })
        );
    }

    #[test]
    fn test_explicit_examples_win_and_untyped_are_omitted() {
        let schema = json!({
            "type": "object",
            "properties": {
                "username": {"type": "string", "example": "john_doe"},
                "age": {"type": "integer", "example": 30},
                "tags": {"example": ["a", "b"]},
                "nickname": {"example": null},
                "ref": {"$ref": "#/components/schemas/Other"},
                "mystery": {"type": "uuid"}
            }
        });

        assert_eq!(
            ExampleGenerator::generate(Some(&schema)),
            json!({
                "username": "john_doe",
                "age": 30,
                "tags": ["a", "b"],
                "nickname": null
            })
        );
    }

    #[test]
    fn test_nested_objects() {
        let schema = json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "object",
                    "properties": {
                        "city": {"type": "string"},
                        "zip": {"type": "integer"}
                    }
                },
                "meta": {"type": "object"}
            }
        });

        assert_eq!(
            ExampleGenerator::generate(Some(&schema)),
            json!({"address": {"city": "string", "zip": 0}, "meta": {}})
        );
    }

    #[test]
    fn test_render_keeps_declaration_order() {
        let schema = json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "boolean"},
                "alpha": {"type": "string"}
            }
        });

        assert_eq!(
            ExampleGenerator::render(Some(&schema)).unwrap(),
            "{\n  \"zeta\": false,\n  \"alpha\": \"string\"\n}"
        );
        assert_eq!(ExampleGenerator::render(None).unwrap(), "{}");
    }
}
