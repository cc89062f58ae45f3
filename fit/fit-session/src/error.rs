//! Error types for fitting sessions.

use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while driving a fitting session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The pose source failed to produce a frame.
    #[error("pose source failed: {0}")]
    Source(String),

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

impl SessionError {
    /// Creates a source failure error.
    #[must_use]
    pub fn source_failed(reason: impl Into<String>) -> Self {
        Self::Source(reason.into())
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
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
