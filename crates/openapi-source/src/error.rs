//! Error types for fetching and reading OpenAPI documents

use thiserror::Error;

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Source error types
#[derive(Error, Debug)]
pub enum SourceError {
    /// The server could not be reached or the body could not be read
    #[error("Request failed: {0}")]
    NetworkError(String),

    /// The server answered with something other than 200
    #[error("HTTP {status}{}", reason_suffix(.reason))]
    HttpError { status: u16, reason: String },

    /// The body is not valid JSON
    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn reason_suffix(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(": {}", reason)
    }
}
