//! Storage key and cookie name constants.

/// Token of the active session.
pub const AUTH_TOKEN: &str = "authToken";

/// Loginid treated as the authenticated account for the session.
pub const ACTIVE_LOGINID: &str = "active_loginid";

/// Country returned by the authorize call.
pub const CLIENT_COUNTRY: &str = "client.country";

/// Account type carried alongside a raw login token in the URL.
pub const ACCOUNT_TYPE: &str = "account_type";

/// Transient server-host override consulted by endpoint resolution.
/// Must never remain set once the bootstrap routine exits.
pub const SERVER_URL_OVERRIDE: &str = "config.server_url";

/// Session token written by the separate session-token login flow;
/// the header only reads it.
pub const SESSION_TOKEN: &str = "session_token";

/// Keys removed by [`crate::clear_auth_data`].
pub const AUTH_DATA_KEYS: [&str; 5] = [
    AUTH_TOKEN,
    ACTIVE_LOGINID,
    CLIENT_COUNTRY,
    ACCOUNT_TYPE,
    SESSION_TOKEN,
];

/// Cookie indicating whether the user was logged in previously.
pub const LOGGED_STATE_COOKIE: &str = "logged_state";
