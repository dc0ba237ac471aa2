//! Type definitions for OpenAPI documents

use crate::lenient;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP methods that carry operations in a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Match a path item key against the known methods, ignoring case
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "patch" => Some(HttpMethod::Patch),
            "delete" => Some(HttpMethod::Delete),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter location in HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    #[serde(other)]
    Other,
}

/// Top-level OpenAPI document
///
/// Every field is read loosely: a value of the wrong JSON type is treated as
/// absent, so any JSON object converts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenApiDocument {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub info: Option<Info>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub servers: Option<Vec<Server>>,
    /// Path items keep every key; only method keys are read as operations
    #[serde(default, deserialize_with = "lenient::optional")]
    pub paths: Option<IndexMap<String, Value>>,
    /// Document-wide security requirements, kept as-is
    #[serde(default)]
    pub security: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub operation_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub tags: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub request_body: Option<RequestBody>,
    #[serde(default, deserialize_with = "lenient::map")]
    pub responses: Option<IndexMap<String, Response>>,
    #[serde(default)]
    pub security: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "in", default, deserialize_with = "lenient::optional")]
    pub location: Option<ParameterLocation>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub required: bool,
    #[serde(default)]
    pub example: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default, deserialize_with = "lenient::map")]
    pub content: Option<IndexMap<String, MediaType>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::map")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// A single operation together with the path and method that identify it
#[derive(Debug, Clone)]
pub struct OperationEntry<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: Operation,
}

impl OpenApiDocument {
    /// Read a document out of an already parsed JSON value
    ///
    /// A value that is not an object reads as an empty document.
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// First server URL, if it is set and non-empty
    pub fn server_url(&self) -> Option<&str> {
        self.servers
            .as_ref()
            .and_then(|servers| servers.first())
            .and_then(|server| server.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.title.as_deref())
            .filter(|title| !title.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.description.as_deref())
            .filter(|description| !description.is_empty())
    }

    /// Document-level `security` is set to a truthy value; `[]` counts
    pub fn has_security(&self) -> bool {
        self.security.as_ref().is_some_and(lenient::truthy)
    }

    /// All method operations in document order
    pub fn operations(&self) -> Vec<OperationEntry<'_>> {
        let mut entries = Vec::new();

        let Some(paths) = &self.paths else {
            return entries;
        };

        for (path, item) in paths {
            let Some(item) = item.as_object() else {
                continue;
            };

            for (key, value) in item {
                let Some(method) = HttpMethod::from_key(key) else {
                    continue;
                };

                entries.push(OperationEntry {
                    path,
                    method,
                    operation: Operation::deserialize(value).unwrap_or_default(),
                });
            }
        }

        entries
    }
}

impl Operation {
    /// Non-empty summary, else non-empty operation id
    pub fn display_name(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.operation_id.as_deref().filter(|s| !s.is_empty()))
    }

    pub fn first_tag(&self) -> Option<String> {
        self.tags
            .as_ref()
            .and_then(|tags| tags.first())
            .and_then(lenient::text_of)
    }

    /// Operation-level `security` is set to a truthy value; `[]` counts
    pub fn has_security(&self) -> bool {
        self.security.as_ref().is_some_and(lenient::truthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_from_key_ignores_case() {
        assert_eq!(HttpMethod::from_key("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_key("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::from_key("options"), Some(HttpMethod::Options));
        assert_eq!(HttpMethod::from_key("parameters"), None);
        assert_eq!(HttpMethod::from_key("trace"), None);
    }

    #[test]
    fn test_operations_skip_non_method_keys() {
        let doc = OpenApiDocument::from_value(&json!({
            "paths": {
                "/users": {
                    "parameters": [{"name": "x", "in": "query"}],
                    "summary": "Users",
                    "get": {"summary": "List"},
                    "POST": {"summary": "Create"}
                },
                "/users/{id}": {
                    "delete": {"operationId": "deleteUser"}
                }
            }
        }));

        let ops = doc.operations();
        let keys: Vec<(HttpMethod, &str)> = ops.iter().map(|e| (e.method, e.path)).collect();
        assert_eq!(
            keys,
            vec![
                (HttpMethod::Get, "/users"),
                (HttpMethod::Post, "/users"),
                (HttpMethod::Delete, "/users/{id}"),
            ]
        );
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let doc = OpenApiDocument::from_value(&json!({
            "info": null,
            "servers": null,
            "paths": {"/a": {"get": {"tags": null, "security": null, "responses": null}}},
            "security": null
        }));

        assert!(doc.title().is_none());
        assert!(doc.server_url().is_none());
        assert!(!doc.has_security());

        let ops = doc.operations();
        assert!(!ops[0].operation.has_security());
        assert!(ops[0].operation.first_tag().is_none());
    }

    #[test]
    fn test_empty_security_array_is_present() {
        let doc = OpenApiDocument::from_value(&json!({
            "paths": {"/a": {"get": {"security": []}}},
            "security": []
        }));

        assert!(doc.has_security());
        assert!(doc.operations()[0].operation.has_security());
    }

    #[test]
    fn test_falsy_security_is_absent() {
        let doc = OpenApiDocument::from_value(&json!({
            "paths": {"/a": {"get": {"security": false}}},
            "security": 0
        }));

        assert!(!doc.has_security());
        assert!(!doc.operations()[0].operation.has_security());
    }

    #[test]
    fn test_display_name_falls_back() {
        let op = Operation {
            summary: Some(String::new()),
            operation_id: Some("getUser".to_string()),
            ..Default::default()
        };
        assert_eq!(op.display_name(), Some("getUser"));

        let op = Operation::default();
        assert_eq!(op.display_name(), None);
    }

    #[test]
    fn test_unknown_parameter_location() {
        let param: Parameter =
            serde_json::from_value(json!({"name": "sid", "in": "cookie"})).unwrap();
        assert_eq!(param.location, Some(ParameterLocation::Cookie));

        let param: Parameter =
            serde_json::from_value(json!({"name": "x", "in": "body"})).unwrap();
        assert_eq!(param.location, Some(ParameterLocation::Other));

        let param: Parameter = serde_json::from_value(json!({"name": "x", "in": 3})).unwrap();
        assert_eq!(param.location, None);
    }

    #[test]
    fn test_required_uses_truthiness() {
        let required = |value: Value| {
            serde_json::from_value::<Parameter>(json!({"name": "q", "in": "query", "required": value}))
                .unwrap()
                .required
        };

        assert!(required(json!(true)));
        assert!(required(json!("true")));
        assert!(required(json!("false")));
        assert!(required(json!(1)));
        assert!(!required(json!(false)));
        assert!(!required(json!(0)));
        assert!(!required(json!("")));
        assert!(!required(json!(null)));
    }

    #[test]
    fn test_scalar_text_fields_of_other_types() {
        let doc = OpenApiDocument::from_value(&json!({
            "info": {"title": 1, "description": {"nested": true}},
            "servers": [{"url": 42}],
            "paths": {
                "/a": {
                    "get": {
                        "summary": 7,
                        "tags": [3],
                        "responses": {"200": {"description": 200}}
                    }
                }
            }
        }));

        assert_eq!(doc.title(), Some("1"));
        assert_eq!(doc.description(), None);
        assert_eq!(doc.server_url(), Some("42"));

        let op = &doc.operations()[0].operation;
        assert_eq!(op.display_name(), Some("7"));
        assert_eq!(op.first_tag().as_deref(), Some("3"));

        let responses = op.responses.as_ref().unwrap();
        assert_eq!(responses["200"].description.as_deref(), Some("200"));
    }

    #[test]
    fn test_wrong_shapes_read_as_absent() {
        let doc = OpenApiDocument::from_value(&json!({
            "info": "PhoneHub",
            "servers": "http://x",
            "paths": {
                "/text": "not a path item",
                "/a": {
                    "get": {
                        "tags": 42,
                        "parameters": "nope",
                        "requestBody": [],
                        "responses": {"200": "OK", "404": {"content": 5}}
                    },
                    "post": "not an operation"
                }
            }
        }));

        assert!(doc.title().is_none());
        assert!(doc.server_url().is_none());

        let ops = doc.operations();
        assert_eq!(ops.len(), 2);

        let get = &ops[0].operation;
        assert!(get.first_tag().is_none());
        assert!(get.parameters.is_none());
        assert!(get.request_body.is_none());

        let responses = get.responses.as_ref().unwrap();
        assert_eq!(responses.len(), 2);
        assert!(responses["200"].description.is_none());
        assert!(responses["404"].content.is_none());

        assert_eq!(ops[1].method, HttpMethod::Post);
        assert!(ops[1].operation.display_name().is_none());
    }

    #[test]
    fn test_non_object_document_is_empty() {
        let doc = OpenApiDocument::from_value(&json!(["not", "a", "document"]));
        assert!(doc.operations().is_empty());
        assert!(doc.title().is_none());
    }

    #[test]
    fn test_server_url_skips_empty() {
        let doc = OpenApiDocument::from_value(&json!({"servers": [{"url": ""}]}));
        assert!(doc.server_url().is_none());

        let doc = OpenApiDocument::from_value(&json!({"servers": ["bad", {"url": "https://other"}]}));
        assert!(doc.server_url().is_none());

        let doc = OpenApiDocument::from_value(&json!({
            "servers": [{"url": "https://api.example.com"}, {"url": "https://other"}]
        }));
        assert_eq!(doc.server_url(), Some("https://api.example.com"));
    }
}
