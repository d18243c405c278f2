//! Bootstrap view resolution and auth-error recovery.

use crate::state::{
    AuthOutcome, AuthStateHandle, AUTH_ERROR_CTA_LABEL, AUTH_ERROR_HEADER, AUTH_ERROR_MESSAGE,
    GENERIC_ERROR_MESSAGE,
};
use tradehub_core::Navigate;
use tradehub_storage::{clear_auth_data, KeyValueStore, StorageResult};
use tracing::info;
use url::Url;

/// What the page shows while and after the bootstrap runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapView {
    /// Bootstrap still in flight.
    Loading,
    /// Terminal auth error: full page with a single recovery action.
    AuthErrorPage {
        header: String,
        message: String,
        cta_label: String,
    },
    /// Generic error: dismissible modal, no destructive action.
    ErrorModal { message: String },
    /// Bootstrap finished cleanly; render the application.
    App,
}

/// Resolve the view from the current auth state.
pub fn resolve_view(state: &AuthStateHandle) -> BootstrapView {
    if !state.completed() {
        return BootstrapView::Loading;
    }
    match state.outcome() {
        AuthOutcome::InvalidToken => BootstrapView::AuthErrorPage {
            header: AUTH_ERROR_HEADER.to_string(),
            message: state
                .message()
                .unwrap_or_else(|| AUTH_ERROR_MESSAGE.to_string()),
            cta_label: AUTH_ERROR_CTA_LABEL.to_string(),
        },
        AuthOutcome::OtherError => BootstrapView::ErrorModal {
            message: state
                .message()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        },
        AuthOutcome::None => BootstrapView::App,
    }
}

/// The auth-error page's only action: clear local session data and navigate
/// back to the application origin.
pub fn recover_from_auth_error(
    store: &dyn KeyValueStore,
    nav: &dyn Navigate,
    origin: &Url,
) -> StorageResult<()> {
    clear_auth_data(store)?;
    info!(origin = %origin, "Auth-error recovery: redirecting to origin");
    nav.replace(origin);
    Ok(())
}
