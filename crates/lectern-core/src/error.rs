//! Lookup error types

use thiserror::Error;

/// Errors surfaced by the lookup layer
///
/// Only two situations are reported as "not found": a translation that is not
/// provisioned, and a single verse that does not exist. List-shaped lookups
/// that match nothing return empty results instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Requested acronym has no provisioned storage unit
    #[error("Translation not found: {0}")]
    TranslationNotFound(String),

    /// Fully-qualified verse lookup matched zero rows
    #[error("Verse not found: {translation} {book_id} {chapter}:{verse}")]
    VerseNotFound {
        translation: String,
        book_id: i64,
        chapter: i64,
        verse: i64,
    },

    /// Request parameters are well-formed but inconsistent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The storage unit exists but could not be opened or queried
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl LookupError {
    /// Whether the error describes a missing resource rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TranslationNotFound(_) | Self::VerseNotFound { .. }
        )
    }
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_not_found_message_names_the_reference() {
        let err = LookupError::VerseNotFound {
            translation: "KJV".to_string(),
            book_id: 1,
            chapter: 1,
            verse: 9999,
        };
        assert_eq!(err.to_string(), "Verse not found: KJV 1 1:9999");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(LookupError::TranslationNotFound("XYZ".into()).is_not_found());
        assert!(!LookupError::StorageUnavailable("locked".into()).is_not_found());
        assert!(!LookupError::InvalidRequest("bad range".into()).is_not_found());
    }
}
