//! Shared auth state observed by the rendering layer.

use parking_lot::RwLock;
use std::sync::Arc;

/// Copy shown on the auth-error page.
pub const AUTH_ERROR_HEADER: &str = "You are logged out";
pub const AUTH_ERROR_MESSAGE: &str =
    "Your session has expired or the login token is invalid. Log in again to continue.";
pub const AUTH_ERROR_CTA_LABEL: &str = "Log in";

/// Copy shown in the generic-error modal.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Sorry, something went wrong while validating your session. Refresh the page to try again.";

/// Terminal error classification for the current page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthOutcome {
    /// No error recorded.
    #[default]
    None,
    /// Invalid or expired token; offers the clear-and-relogin recovery.
    InvalidToken,
    /// Any other failure, including transport errors; dismissible.
    OtherError,
}

#[derive(Debug, Default)]
struct AuthStateInner {
    completed: bool,
    outcome: AuthOutcome,
    message: Option<String>,
}

/// Cloneable handle to the auth state.
///
/// Transitions only move forward: completion latches, and a recorded
/// invalid-token outcome is terminal. A generic error never downgrades an
/// invalid-token outcome, while an invalid-token notification may upgrade a
/// generic one (the listener can fire after the bootstrap has failed for an
/// unrelated reason). There is no reset short of a fresh page load.
#[derive(Debug, Clone, Default)]
pub struct AuthStateHandle {
    inner: Arc<RwLock<AuthStateInner>>,
}

impl AuthStateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invalid/expired-token error. Terminal.
    pub fn record_invalid_token(&self, message: &str) {
        let mut inner = self.inner.write();
        inner.outcome = AuthOutcome::InvalidToken;
        inner.message = Some(message.to_string());
    }

    /// Record a generic (non-auth) error. Ignored once an invalid-token
    /// outcome is recorded.
    pub fn record_other_error(&self, message: &str) {
        let mut inner = self.inner.write();
        if inner.outcome == AuthOutcome::InvalidToken {
            return;
        }
        inner.outcome = AuthOutcome::OtherError;
        inner.message = Some(message.to_string());
    }

    /// Signal bootstrap completion. Latches.
    pub fn mark_completed(&self) {
        self.inner.write().completed = true;
    }

    pub fn completed(&self) -> bool {
        self.inner.read().completed
    }

    pub fn outcome(&self) -> AuthOutcome {
        self.inner.read().outcome
    }

    pub fn message(&self) -> Option<String> {
        self.inner.read().message.clone()
    }
}
