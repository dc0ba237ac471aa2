//! Error types for collection building

use thiserror::Error;

/// Result type alias for build operations
pub type BuildResult<T> = std::result::Result<T, BuildError>;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to render example: {0}")]
    Render(#[from] serde_json::Error),
}
