//! Authorize API seam.

use std::future::Future;
use std::sync::Arc;
use tradehub_storage::keys::SERVER_URL_OVERRIDE;
use tradehub_storage::KeyValueStore;
use tradehub_ws::{ApiClient, ApiEndpoint, ApiResponse, WsResult};

/// Connection settings for the authorize call.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub app_id: u32,
    /// Default server host, used unless the transient override is set.
    pub server_url: String,
    pub language: String,
    pub brand: String,
}

/// The one remote call the bootstrap makes.
///
/// Implementations own the whole client lifecycle: connect, one authorize
/// round trip, release on every path.
pub trait AuthorizeApi {
    fn authorize(&self, token: &str) -> impl Future<Output = WsResult<ApiResponse>> + Send;
}

/// Production implementation over the WebSocket API.
///
/// The endpoint host is resolved from storage at call time so the transient
/// `config.server_url` override set by the bootstrap applies to the call it
/// was set for.
pub struct WsAuthorize {
    store: Arc<dyn KeyValueStore>,
    settings: ApiSettings,
}

impl WsAuthorize {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: ApiSettings) -> Self {
        Self { store, settings }
    }

    fn endpoint(&self) -> ApiEndpoint {
        let host = self
            .store
            .get(SERVER_URL_OVERRIDE)
            .unwrap_or_else(|| self.settings.server_url.clone());
        ApiEndpoint {
            host,
            app_id: self.settings.app_id,
            language: self.settings.language.clone(),
            brand: self.settings.brand.clone(),
        }
    }
}

impl AuthorizeApi for WsAuthorize {
    async fn authorize(&self, token: &str) -> WsResult<ApiResponse> {
        let endpoint = self.endpoint();
        let mut client = ApiClient::connect(&endpoint).await?;
        let response = client.authorize(token).await;
        client.disconnect().await;
        response
    }
}
