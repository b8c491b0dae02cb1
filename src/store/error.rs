//! Key-value store error types

use thiserror::Error;

/// Errors that can occur in a key-value store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend cannot be reached (e.g. browser storage disabled)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The key cannot be mapped onto the backend
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid key: ../etc");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
