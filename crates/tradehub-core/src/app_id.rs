//! Application-id registry.
//!
//! The platform is registered under several application ids depending on the
//! deployment (production row, BE/ME mirrors, staging, localhost). Token
//! validation behaves differently for the production ids: when no explicit
//! account type arrives with the login URL, the validation call is pointed at
//! the production validation host for that one call.

/// Production application ids (main, BE mirror, ME mirror).
pub const PRODUCTION_APP_IDS: [u32; 3] = [65555, 65556, 65557];

/// Staging application ids (main, BE mirror, ME mirror).
pub const STAGING_APP_IDS: [u32; 3] = [29934, 29864, 29842];

/// Application id used for local development.
pub const LOCALHOST_APP_ID: u32 = 36300;

/// Whether the given application id belongs to the production set.
pub fn is_production_app_id(app_id: u32) -> bool {
    PRODUCTION_APP_IDS.contains(&app_id)
}
