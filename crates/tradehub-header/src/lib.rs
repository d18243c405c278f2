//! Header presenter for tradehub.
//!
//! A pure function of externally-owned auth state to one of three account
//! sections: loading placeholder, authenticated controls, or the login
//! action. The header owns no session state itself; it reads the shared
//! auth flags and the stored session token and delegates every action.

pub mod actions;
pub mod presenter;
pub mod state;

pub use actions::{login, logout};
pub use presenter::{render_header, resolve_account_section, AccountSection, HeaderRender};
pub use state::HeaderState;
