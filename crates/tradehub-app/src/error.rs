//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid page URL: {0}")]
    PageUrl(#[from] url::ParseError),

    #[error("Core error: {0}")]
    Core(#[from] tradehub_core::CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] tradehub_storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
