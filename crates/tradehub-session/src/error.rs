//! Session error types.

use thiserror::Error;

/// Failures inside the bootstrap routine.
///
/// Everything here classifies as a generic (non-auth) error for the UI;
/// the invalid-token case never surfaces as an `Err` — it is recorded on the
/// auth state directly.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] tradehub_storage::StorageError),

    #[error("API error: {0}")]
    Ws(#[from] tradehub_ws::WsError),
}

pub type SessionResult<T> = Result<T, SessionError>;
