//! Error types for catalog operations.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A garment or catalog failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),
}

impl CatalogError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else if err.is_syntax() || err.is_data() || err.is_eof() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}
