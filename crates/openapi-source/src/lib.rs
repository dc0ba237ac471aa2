//! # openapi-source
//!
//! Fetches an OpenAPI 3.x document from a running server and exposes its
//! operations in declaration order.

mod error;
mod fetcher;
mod lenient;
mod types;

pub use error::{SourceError, SourceResult};
pub use fetcher::{api_docs_url, SpecFetcher, API_DOCS_PATH};
pub use lenient::{text_of, truthy};
pub use types::*;
