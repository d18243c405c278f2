//! Externally-owned state the header renders from.

use serde::{Deserialize, Serialize};

/// Snapshot of the auth flags the header reads.
///
/// All of this is owned elsewhere (API base, client store, OAuth flow); the
/// header only consumes a point-in-time copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderState {
    /// Page-level authentication still in progress.
    pub is_authenticating: bool,
    /// An authorize call is in flight.
    pub is_authorizing: bool,
    /// Single-sign-on login in progress.
    pub is_single_logging_in: bool,
    /// A session has been authorized.
    pub is_authorized: bool,
    /// A logout is in flight; disables the logout action.
    pub is_logging_out: bool,
    /// Loginid currently treated as the authenticated account.
    pub active_loginid: Option<String>,
    /// External request to suppress the header entirely.
    pub should_hide_header: bool,
}
