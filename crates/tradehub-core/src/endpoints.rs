//! Endpoint construction for the WebSocket API and OAuth login.

use crate::error::CoreResult;
use url::Url;

/// Host used to validate tokens for production application ids when no
/// explicit account type was supplied with the login URL.
pub const PRODUCTION_VALIDATION_HOST: &str = "realv2.derivws.com";

/// Build the WebSocket API endpoint for a server host.
///
/// Shape: `wss://<host>/websockets/v3?app_id=<id>&l=<lang>&brand=<brand>`.
pub fn socket_url(host: &str, app_id: u32, language: &str, brand: &str) -> CoreResult<Url> {
    let mut url = Url::parse(&format!("wss://{host}/websockets/v3"))?;
    url.query_pairs_mut()
        .append_pair("app_id", &app_id.to_string())
        .append_pair("l", language)
        .append_pair("brand", &brand.to_lowercase());
    Ok(url)
}

/// Build the OAuth authorize URL used by the header's login action.
///
/// Shape: `https://<oauth_host>/oauth2/authorize?app_id=<id>&l=EN&brand=<brand>`.
/// The language is pinned to `EN`; the OAuth page handles its own locale.
pub fn oauth_authorize_url(oauth_host: &str, app_id: u32, brand: &str) -> CoreResult<Url> {
    let mut url = Url::parse(&format!("https://{oauth_host}/oauth2/authorize"))?;
    url.query_pairs_mut()
        .append_pair("app_id", &app_id.to_string())
        .append_pair("l", "EN")
        .append_pair("brand", brand);
    Ok(url)
}
