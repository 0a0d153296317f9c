//! Error types for bookcheck

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bookcheck operations
pub type Result<T> = std::result::Result<T, BookcheckError>;

/// Main error type for bookcheck
#[derive(Error, Debug)]
pub enum BookcheckError {
    /// Reading list errors (bad position, empty title)
    #[error(transparent)]
    List(#[from] ListError),

    /// Storage file errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Terminal I/O errors (stdin, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by operations on the in-memory list
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListError {
    #[error("invalid index {position} (the list has {len} books)")]
    InvalidIndex { position: i64, len: usize },

    #[error("empty book's name is not allowed")]
    EmptyName,
}

/// Errors raised while loading or saving the storage file
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed book file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize books: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Specialized result type for list operations
pub type ListResult<T> = std::result::Result<T, ListError>;

/// Specialized result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Whether the lenient load policy absorbs this error.
    ///
    /// Unreadable and malformed files are treated as an empty list;
    /// write-side failures always surface.
    pub fn is_recoverable_on_load(&self) -> bool {
        matches!(self, StorageError::Read { .. } | StorageError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = BookcheckError::from(ListError::InvalidIndex { position: 4, len: 3 });
        assert_eq!(err.to_string(), "invalid index 4 (the list has 3 books)");
    }

    #[test]
    fn test_empty_name_message() {
        let err = BookcheckError::from(ListError::EmptyName);
        assert_eq!(err.to_string(), "empty book's name is not allowed");
    }

    #[test]
    fn test_recoverable_on_load() {
        let read = StorageError::Read {
            path: PathBuf::from(".books.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let write = StorageError::Write {
            path: PathBuf::from(".books.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(read.is_recoverable_on_load());
        assert!(!write.is_recoverable_on_load());
    }
}
