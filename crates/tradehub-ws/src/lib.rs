//! WebSocket authorize client for the tradehub API.
//!
//! Single-shot by design: the session bootstrap performs at most one
//! token-validation round trip per page load, so the client connects, sends
//! one `authorize` request, waits for the matching reply, and closes. There
//! is no reconnection, heartbeat, or subscription machinery here.

pub mod client;
pub mod error;
pub mod message;

pub use client::{ApiClient, ApiEndpoint};
pub use error::{WsError, WsResult};
pub use message::{
    AccountEntry, ApiError, ApiResponse, AuthorizeData, AuthorizeRequest, INVALID_TOKEN_CODE,
};

use std::sync::Once;

static INIT_CRYPTO: Once = Once::new();

/// Initialize the TLS crypto provider.
/// Must be called before any WebSocket connections are made.
pub fn init_crypto() {
    INIT_CRYPTO.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}
