//! Catalog error types.

use thiserror::Error;

/// Errors raised at the catalog's parsing boundaries.
///
/// Filtering and sorting never fail; these only come from turning
/// external text (URL values, CLI arguments, JSON bodies) into typed values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Sort key not in the supported set.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Filter name not in the supported set.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Range bound that is present but not a number.
    #[error("Invalid range '{value}': {reason}")]
    InvalidRange { value: String, reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
