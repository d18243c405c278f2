//! Core domain types for the tradehub session bootstrap.
//!
//! Contains the login-parameter model parsed from the page URL, the
//! application-id registry, endpoint construction, and the navigation seam
//! shared by the session and header crates.

pub mod app_id;
pub mod endpoints;
pub mod error;
pub mod login;
pub mod nav;

pub use app_id::{is_production_app_id, LOCALHOST_APP_ID, PRODUCTION_APP_IDS, STAGING_APP_IDS};
pub use endpoints::{oauth_authorize_url, socket_url, PRODUCTION_VALIDATION_HOST};
pub use error::{CoreError, CoreResult};
pub use login::{parse_login_params, raw_param, strip_params, LoginInfo, ParsedLogin};
pub use nav::Navigate;
