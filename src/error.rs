//! Error types for the ingestion backend

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ingestion backend errors
#[derive(Debug, Error)]
pub enum Error {
    /// File is not a PDF or DOCX document
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parser cannot read the document structure
    #[error("Failed to parse '{filename}': {message}")]
    CorruptDocument { filename: String, message: String },

    /// Extraction produced no non-whitespace text
    #[error("No text content in '{0}'")]
    EmptyDocument(String),

    /// File exceeds the configured byte ceiling
    #[error("File is too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an unsupported format error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat(message.into())
    }

    /// Create a corrupt document error
    pub fn corrupt(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptDocument {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_format",
                msg.clone(),
            ),
            Error::CorruptDocument { filename, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "corrupt_document",
                format!("Failed to parse '{}': {}", filename, message),
            ),
            Error::EmptyDocument(filename) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "empty_document",
                format!("No text content in '{}'", filename),
            ),
            Error::TooLarge { size, limit } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "too_large",
                format!("File is too large: {} bytes (limit {})", size, limit),
            ),
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
