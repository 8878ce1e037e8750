//! Content error types
//!
//! Errors raised while decoding records or maintaining collection invariants.

use thiserror::Error;

use super::types::Section;

/// Errors that can occur in the content layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Section name is not one of works, certifications, blog
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Record carries neither `_id` nor `id`
    #[error("Record has no identifier")]
    MissingId,

    /// Record body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// An item with this id already exists in the section
    #[error("Duplicate id '{id}' in {section}")]
    DuplicateId { section: Section, id: String },
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Decode(err.to_string())
    }
}

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::UnknownSection("photos".to_string());
        assert_eq!(err.to_string(), "Unknown section: photos");

        let err = ContentError::DuplicateId {
            section: Section::Blog,
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate id '7' in blog");
    }
}
