//! Storage error types

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Item store failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Item not found")]
    ItemNotFound(i64),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Document backend failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid document key: {0:?}")]
    InvalidKey(String),

    #[error("Corrupt document {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
