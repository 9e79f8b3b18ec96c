//! Error types for sqlblob-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Corrupt data for {path}: {reason}")]
    CorruptData { path: String, reason: String },

    #[error("Invalid DSN: {0}")]
    InvalidDsn(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }

    pub(crate) fn corrupt(path: &str, reason: impl ToString) -> Self {
        StorageError::CorruptData {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
