//! Account-section decision logic.

use crate::state::HeaderState;
use serde::Serialize;
use tradehub_storage::keys::SESSION_TOKEN;
use tradehub_storage::KeyValueStore;

/// The three mutually exclusive account sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AccountSection {
    /// Placeholder while any login/authorize path is still settling.
    Loading,
    /// Account switcher plus logout action.
    Authenticated {
        loginid: String,
        /// Logout is disabled while a logout is already in flight.
        logout_enabled: bool,
    },
    /// Login action.
    LoggedOut,
}

/// Rendered header output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRender {
    pub account_section: AccountSection,
}

/// Resolve the account section. First match wins:
///
/// 1. Any in-flight login path, an active loginid that is not yet
///    authorized, or a stored session token with neither authorization nor
///    an active loginid → loading.
/// 2. Active loginid and authorized → authenticated controls.
/// 3. Otherwise → login action.
pub fn resolve_account_section(
    state: &HeaderState,
    store: &dyn KeyValueStore,
) -> AccountSection {
    let has_session_token = store.get(SESSION_TOKEN).is_some();
    let has_active_loginid = state.active_loginid.is_some();

    if state.is_authenticating
        || state.is_authorizing
        || state.is_single_logging_in
        || (has_active_loginid && !state.is_authorized)
        || (has_session_token && !state.is_authorized && !has_active_loginid)
    {
        return AccountSection::Loading;
    }

    match &state.active_loginid {
        Some(loginid) if state.is_authorized => AccountSection::Authenticated {
            loginid: loginid.clone(),
            logout_enabled: !state.is_logging_out,
        },
        _ => AccountSection::LoggedOut,
    }
}

/// Render the header, or nothing when suppression is requested.
pub fn render_header(state: &HeaderState, store: &dyn KeyValueStore) -> Option<HeaderRender> {
    if state.should_hide_header {
        return None;
    }
    Some(HeaderRender {
        account_section: resolve_account_section(state, store),
    })
}
