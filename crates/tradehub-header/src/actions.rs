//! Header actions: login navigation and logout delegation.

use crate::state::HeaderState;
use tradehub_core::{oauth_authorize_url, CoreResult, Navigate};
use tracing::info;

/// Full-page navigation to the OAuth authorize page.
pub fn login(nav: &dyn Navigate, oauth_host: &str, app_id: u32, brand: &str) -> CoreResult<()> {
    let url = oauth_authorize_url(oauth_host, app_id, brand)?;
    info!(url = %url, "Redirecting to OAuth login");
    nav.replace(&url);
    Ok(())
}

/// Delegate logout to the externally supplied handler.
///
/// The header implements no network or storage logic of its own here; it
/// only refuses to re-trigger while a logout is already in flight. Returns
/// whether the handler ran.
pub fn logout<H: FnOnce()>(state: &HeaderState, handler: H) -> bool {
    if state.is_logging_out {
        return false;
    }
    handler();
    true
}
