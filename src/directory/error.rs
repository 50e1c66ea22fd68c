//! User directory error types

use thiserror::Error;

/// Errors returned by a [`UserDirectory`](super::UserDirectory)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Backing store unreachable or failed
    #[error("Directory unavailable: {0}")]
    DataUnavailable(String),

    /// No user with the requested id
    #[error("User not found: {0}")]
    NotFound(String),
}

impl DirectoryError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable(reason.into())
    }

    pub fn not_found(user_id: impl Into<String>) -> Self {
        Self::NotFound(user_id.into())
    }
}

impl From<rusqlite::Error> for DirectoryError {
    fn from(err: rusqlite::Error) -> Self {
        DirectoryError::DataUnavailable(err.to_string())
    }
}

impl From<tokio::task::JoinError> for DirectoryError {
    fn from(err: tokio::task::JoinError) -> Self {
        DirectoryError::DataUnavailable(format!("directory task failed: {}", err))
    }
}

/// Result type alias for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::not_found("42");
        assert_eq!(err.to_string(), "User not found: 42");

        let err = DirectoryError::unavailable("connection refused");
        assert_eq!(err.to_string(), "Directory unavailable: connection refused");
    }

    #[test]
    fn test_sqlite_error_conversion() {
        let err: DirectoryError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, DirectoryError::DataUnavailable(_)));
    }
}
