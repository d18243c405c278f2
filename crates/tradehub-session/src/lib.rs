//! Session bootstrap for tradehub.
//!
//! Runs once per page load: parses login parameters from the URL, exchanges
//! the primary token for session details over the WebSocket API, persists the
//! result to session storage, and drives the forward-only auth state the
//! rendering layer observes. A separate listener folds process-wide
//! invalid-token notifications into the same terminal state.

pub mod api;
pub mod bootstrap;
pub mod bus;
pub mod error;
pub mod override_guard;
pub mod state;
pub mod view;

pub use api::{ApiSettings, AuthorizeApi, WsAuthorize};
pub use bootstrap::Bootstrapper;
pub use bus::{spawn_invalid_token_listener, AppEvent, EventBus};
pub use error::{SessionError, SessionResult};
pub use override_guard::ServerOverride;
pub use state::{AuthOutcome, AuthStateHandle};
pub use view::{recover_from_auth_error, resolve_view, BootstrapView};
