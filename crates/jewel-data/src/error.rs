//! Product loading error types.

use crate::Section;
use thiserror::Error;

/// Errors that can occur when loading a product collection.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to read the source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a product listing.
    #[error("Failed to parse listing: {0}")]
    Parse(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The source has nothing for this section.
    #[error("No products available for {0}")]
    NotFound(Section),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
