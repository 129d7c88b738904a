//! Error type for startup document loading.

use thiserror::Error;

/// Errors that can occur while reading or parsing startup documents.
///
/// Every variant is terminal for the session: the viewer surfaces the
/// stringified error as a permanent error state and a reload is the only
/// recovery path.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error while reading a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but did not have the expected shape
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// Description of the shape error
        message: String,
    },
}

impl LoadError {
    /// Create an invalid document error with a message.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}
