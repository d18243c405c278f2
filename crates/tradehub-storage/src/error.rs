//! Storage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Temporary file error: {0}")]
    TempFile(#[from] tempfile::PersistError),
}

pub type StorageResult<T> = Result<T, StorageError>;
