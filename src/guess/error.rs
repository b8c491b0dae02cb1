//! Guess book error types
//!
//! Defines the errors a submission or a load/save cycle can produce.

use thiserror::Error;

use crate::guess::draft::DraftField;
use crate::guess::types::RecordId;
use crate::store::StoreError;

/// Errors that can occur while recording guesses
#[derive(Error, Debug)]
pub enum GuessError {
    /// A draft field was present but could not be coerced
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: DraftField, reason: String },

    /// The key-value store rejected a read or write
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// The loaded list already holds the largest possible id
    #[error("No record id left after {0}")]
    IdsExhausted(RecordId),

    /// Serialization/deserialization of the record list failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GuessError {
    pub(crate) fn invalid(field: DraftField, reason: impl Into<String>) -> Self {
        GuessError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for GuessError {
    fn from(err: serde_json::Error) -> Self {
        GuessError::Serialization(err.to_string())
    }
}

/// Result type alias for guess book operations
pub type GuessResult<T> = Result<T, GuessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuessError::invalid(DraftField::WeightKg, "not a number: \"abc\"");
        assert_eq!(err.to_string(), "Invalid weight: not a number: \"abc\"");

        let err = GuessError::IdsExhausted(RecordId(u64::MAX));
        assert_eq!(err.to_string(), "No record id left after 18446744073709551615");

        let err = GuessError::Serialization("expected value".to_string());
        assert_eq!(err.to_string(), "Serialization error: expected value");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::Unavailable("localStorage disabled".to_string());
        let err: GuessError = store_err.into();
        assert!(matches!(err, GuessError::Store(_)));
    }
}
