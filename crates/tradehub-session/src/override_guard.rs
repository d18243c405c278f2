//! Scoped server-endpoint override.
//!
//! A leaked `config.server_url` would silently redirect every later
//! validation call to the wrong host, so the override lives in a guard whose
//! `Drop` removes the key on every exit path, including early returns and
//! panics.

use std::sync::Arc;
use tradehub_storage::keys::SERVER_URL_OVERRIDE;
use tradehub_storage::{KeyValueStore, StorageResult};
use tracing::{debug, warn};

/// Transient `config.server_url` override, held for the duration of one
/// validation call.
pub struct ServerOverride {
    store: Arc<dyn KeyValueStore>,
}

impl ServerOverride {
    /// Set the override. The returned guard removes it when dropped.
    pub fn apply(store: Arc<dyn KeyValueStore>, host: &str) -> StorageResult<Self> {
        store.set(SERVER_URL_OVERRIDE, host)?;
        debug!(host, "Server override set for validation call");
        Ok(Self { store })
    }
}

impl Drop for ServerOverride {
    fn drop(&mut self) {
        if let Err(e) = self.store.remove(SERVER_URL_OVERRIDE) {
            warn!(?e, "Failed to remove server override");
        } else {
            debug!("Server override removed");
        }
    }
}
