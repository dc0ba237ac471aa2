//! Fetches OpenAPI documents from a running server

use crate::error::{SourceError, SourceResult};
use crate::types::OpenApiDocument;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

/// Path the server publishes its OpenAPI document under
pub const API_DOCS_PATH: &str = "/api-docs";

/// Documentation URL for a server base URL
pub fn api_docs_url(base_url: &str) -> String {
    format!("{}{}", base_url, API_DOCS_PATH)
}

/// Single-shot OpenAPI fetcher
///
/// One GET per call: no retries, no timeout and redirects are reported as
/// HTTP errors instead of being followed.
pub struct SpecFetcher {
    client: reqwest::Client,
}

impl SpecFetcher {
    pub fn new() -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| SourceError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch `url` and parse the body as JSON
    pub async fn fetch(&self, url: &str) -> SourceResult<Value> {
        info!("Fetching OpenAPI spec from: {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::NetworkError(e.to_string()))?;

        debug!("Received HTTP {} with {} bytes", status.as_u16(), body.len());

        if status != StatusCode::OK {
            return Err(SourceError::HttpError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch `url` and read it as an OpenAPI document
    pub async fn fetch_document(&self, url: &str) -> SourceResult<OpenApiDocument> {
        let value = self.fetch(url).await?;
        Ok(OpenApiDocument::from_value(&value))
    }
}
