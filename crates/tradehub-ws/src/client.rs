//! Single-shot API client.

use crate::error::{WsError, WsResult};
use crate::message::{ApiResponse, AuthorizeRequest};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async_tls_with_config, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::{debug, info, warn};
use url::Url;

/// Resolved API endpoint for one connection.
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    /// Server host (default or the transient `config.server_url` override).
    pub host: String,
    pub app_id: u32,
    pub language: String,
    pub brand: String,
}

impl ApiEndpoint {
    /// Full WebSocket URL for this endpoint.
    pub fn url(&self) -> WsResult<Url> {
        Ok(tradehub_core::socket_url(
            &self.host,
            self.app_id,
            &self.language,
            &self.brand,
        )?)
    }
}

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;
type WsSource = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Connected API client.
///
/// One authorize round trip per connection; callers must invoke
/// [`ApiClient::disconnect`] on every path once the call resolves.
pub struct ApiClient {
    write: WsSink,
    read: WsSource,
    next_req_id: u64,
}

impl ApiClient {
    /// Connect to the API endpoint.
    pub async fn connect(endpoint: &ApiEndpoint) -> WsResult<Self> {
        let url = endpoint.url()?;
        info!(url = %url, "Connecting to API WebSocket");

        let (ws_stream, _response) =
            connect_async_tls_with_config(url.as_str(), None, true, None).await?;
        let (write, read) = ws_stream.split();
        debug!("API WebSocket connected");

        Ok(Self {
            write,
            read,
            next_req_id: 1,
        })
    }

    /// Exchange a login token for session details.
    ///
    /// Sends one authorize request and reads until the matching reply.
    /// Unrelated frames are skipped; pings are answered.
    pub async fn authorize(&mut self, token: &str) -> WsResult<ApiResponse> {
        let req_id = self.next_req_id;
        self.next_req_id += 1;

        let request = AuthorizeRequest::new(token, req_id);
        let payload = serde_json::to_string(&request)?;
        self.write.send(Message::Text(payload)).await?;
        debug!(req_id, "Authorize request sent");

        loop {
            match self.read.next().await {
                Some(Ok(Message::Text(text))) => {
                    let response: ApiResponse = serde_json::from_str(&text)?;
                    if response.answers(req_id) {
                        return Ok(response);
                    }
                    debug!(msg_type = ?response.msg_type, "Skipping unrelated message");
                }
                Some(Ok(Message::Ping(data))) => {
                    self.write.send(Message::Pong(data)).await?;
                }
                Some(Ok(Message::Close(frame))) => {
                    let (code, reason) = frame
                        .map(|f| (f.code.into(), f.reason.to_string()))
                        .unwrap_or((1000, "Normal close".to_string()));
                    warn!(code, %reason, "WebSocket closed before authorize reply");
                    return Err(WsError::ConnectionClosed { code, reason });
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Err(WsError::StreamEnded),
            }
        }
    }

    /// Close the connection. Failures are logged, not surfaced; the
    /// connection is abandoned either way.
    pub async fn disconnect(mut self) {
        if let Err(e) = self.write.send(Message::Close(None)).await {
            debug!(?e, "Close frame not delivered");
        }
    }
}
