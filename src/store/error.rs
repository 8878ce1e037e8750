//! Store error types
//!
//! Errors raised while talking to a content source.

use thiserror::Error;

use crate::content::ContentError;

/// Errors that can occur in Store Sync and its content sources
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request could not be sent or its body could not be read
    #[cfg(feature = "native")]
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest client (browser fetch)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status (strict mode only)
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not a valid record or list of records
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Content(ContentError::from(err))
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Status {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned 503: unavailable");

        let err: StoreError = ContentError::MissingId.into();
        assert_eq!(err.to_string(), "Content error: Record has no identifier");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Content(ContentError::Decode(_))));
    }
}
