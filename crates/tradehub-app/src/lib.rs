//! Tradehub session bootstrap application.
//!
//! Wires the pieces together: storage, cookies, the event bus with its
//! invalid-token listener, the bootstrapper, and the header presenter.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
