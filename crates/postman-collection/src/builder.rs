//! Converts OpenAPI documents into Postman collections

use crate::collection::*;
use crate::error::BuildResult;
use crate::example::ExampleGenerator;
use indexmap::IndexMap;
use openapi_source::{OpenApiDocument, OperationEntry, Parameter, ParameterLocation, Response};
use serde_json::Value;
use tracing::{debug, info};

/// Folder used for operations without tags
pub const DEFAULT_FOLDER: &str = "Default";

const BASE_URL_PLACEHOLDER: &str = "{{baseUrl}}";
const BEARER_TOKEN: &str = "Bearer {{accessToken}}";

/// Builds a Postman collection from an OpenAPI document
pub struct CollectionBuilder<'a> {
    document: &'a OpenApiDocument,
    /// Used for the `baseUrl` variable when the document lists no server
    base_url: &'a str,
}

impl<'a> CollectionBuilder<'a> {
    pub fn new(document: &'a OpenApiDocument, base_url: &'a str) -> Self {
        Self { document, base_url }
    }

    /// Walk every operation once and group the requests by first tag
    pub fn build(&self) -> BuildResult<Collection> {
        let mut folders: IndexMap<String, Folder> = IndexMap::new();

        for entry in self.document.operations() {
            let tag = entry
                .operation
                .first_tag()
                .unwrap_or_else(|| DEFAULT_FOLDER.to_string());
            let item = self.build_item(&entry)?;

            debug!("Converted {} {} into folder {}", entry.method, entry.path, tag);

            folders
                .entry(tag.clone())
                .or_insert_with(|| Folder {
                    name: tag,
                    item: Vec::new(),
                })
                .item
                .push(item);
        }

        let collection = Collection {
            info: self.build_info(),
            item: folders.into_values().collect(),
            variable: vec![Variable {
                key: BASE_URL_VARIABLE.to_string(),
                value: self
                    .document
                    .server_url()
                    .unwrap_or(self.base_url)
                    .to_string(),
                kind: "string".to_string(),
            }],
        };

        info!(
            "Built collection with {} folders and {} requests",
            collection.folder_count(),
            collection.request_count()
        );

        Ok(collection)
    }

    fn build_info(&self) -> CollectionInfo {
        CollectionInfo {
            name: self.document.title().unwrap_or("API Collection").to_string(),
            description: self.document.description().unwrap_or_default().to_string(),
            schema: COLLECTION_SCHEMA.to_string(),
            exporter_id: EXPORTER_ID.to_string(),
        }
    }

    /// Build the request item for one operation
    fn build_item(&self, entry: &OperationEntry<'_>) -> BuildResult<RequestItem> {
        let operation = &entry.operation;

        let name = operation
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} {}", entry.method, entry.path));

        let mut request = Request {
            method: entry.method.as_str().to_string(),
            header: Vec::new(),
            url: Url {
                raw: format!("{}{}", BASE_URL_PLACEHOLDER, entry.path),
                host: vec![BASE_URL_PLACEHOLDER.to_string()],
                path: entry
                    .path
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect(),
                query: None,
            },
            description: operation.description.clone().unwrap_or_default(),
            body: None,
        };

        for param in operation.parameters.iter().flatten() {
            Self::apply_parameter(&mut request, param);
        }

        if let Some((content_type, media)) = operation
            .request_body
            .as_ref()
            .and_then(|body| body.content.as_ref())
            .and_then(|content| content.first())
        {
            request
                .header
                .push(Header::text("Content-Type", content_type.as_str()));

            if let Some(schema) = &media.schema {
                let language = if content_type.contains("json") { "json" } else { "text" };
                request.body = Some(Body::raw(
                    ExampleGenerator::render(Some(schema))?,
                    language,
                ));
            }
        }

        // Either level being present is enough; an empty list still counts.
        if operation.has_security() || self.document.has_security() {
            request.header.push(
                Header::text("Authorization", BEARER_TOKEN).with_description("JWT Bearer Token"),
            );
        }

        let response = operation
            .responses
            .iter()
            .flatten()
            .map(|(status, response)| Self::build_response(&request, status, response))
            .collect::<BuildResult<Vec<_>>>()?;

        Ok(RequestItem {
            name,
            request,
            response,
        })
    }

    fn apply_parameter(request: &mut Request, param: &Parameter) {
        let name = param.name.clone().unwrap_or_default();
        let value = param.example.clone().unwrap_or_else(|| Value::from(""));
        let description = param.description.clone().unwrap_or_default();

        match param.location {
            Some(ParameterLocation::Header) => {
                request.header.push(Header {
                    key: name,
                    value,
                    description: Some(description),
                    kind: "text".to_string(),
                });
            }
            Some(ParameterLocation::Query) => {
                request.url.query.get_or_insert_with(Vec::new).push(QueryParam {
                    key: name,
                    value,
                    description,
                    disabled: !param.required,
                });
            }
            Some(ParameterLocation::Path) => {
                let braced = format!("{{{}}}", name);
                let coloned = format!(":{}", name);
                for segment in request.url.path.iter_mut() {
                    if *segment == braced || *segment == coloned {
                        *segment = coloned.clone();
                    }
                }
            }
            _ => {}
        }
    }

    fn build_response(
        request: &Request,
        status: &str,
        response: &Response,
    ) -> BuildResult<ExampleResponse> {
        let description = response
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Response");

        let schema = response
            .content
            .as_ref()
            .and_then(|content| content.get("application/json"))
            .and_then(|media| media.schema.as_ref());

        let body = match schema {
            Some(schema) => ExampleGenerator::render(Some(schema))?,
            None => String::new(),
        };

        Ok(ExampleResponse {
            name: format!("{} - {}", status, description),
            original_request: request.clone(),
            status: status.to_string(),
            code: parse_status_code(status),
            preview_language: "json".to_string(),
            header: Vec::new(),
            body,
        })
    }
}

/// Leading integer of a status key: `"201"` is 201, `"2XX"` is 2, `"default"` is `None`
fn parse_status_code(status: &str) -> Option<i64> {
    let trimmed = status.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(None, |code: Option<i64>, digit| {
            Some(code.unwrap_or(0).saturating_mul(10).saturating_add(i64::from(digit)))
        })
        .map(|code| sign * code)
}
