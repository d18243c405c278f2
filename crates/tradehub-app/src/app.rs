//! Main application orchestration.
//!
//! One bootstrap pass per invocation: spawn the invalid-token listener, run
//! the login-token exchange against the page URL, then resolve and log the
//! bootstrap view and the header render state.

use crate::config::AppConfig;
use crate::error::AppResult;
use std::sync::Arc;
use tradehub_core::{strip_params, Navigate};
use tradehub_header::{render_header, HeaderState};
use tradehub_session::{
    resolve_view, spawn_invalid_token_listener, AuthOutcome, AuthStateHandle, BootstrapView,
    Bootstrapper, EventBus, WsAuthorize,
};
use tradehub_storage::keys::ACTIVE_LOGINID;
use tradehub_storage::{CookieJar, FileCookieJar, JsonFileStore, KeyValueStore};
use tracing::{info, warn};
use url::Url;

/// Main application.
pub struct Application {
    config: AppConfig,
    store: Arc<dyn KeyValueStore>,
    cookies: Arc<dyn CookieJar>,
    state: AuthStateHandle,
    bus: EventBus,
}

/// Navigation target recorder for the headless binary: a real host
/// environment would replace the page; here the intent is logged.
struct LoggingNavigator;

impl Navigate for LoggingNavigator {
    fn replace(&self, url: &Url) {
        info!(url = %url, "Navigation requested");
    }
}

impl Application {
    /// Create a new application from configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(JsonFileStore::open(&config.storage.session_path)?);
        let cookies: Arc<dyn CookieJar> =
            Arc::new(FileCookieJar::load(&config.storage.cookies_path)?);

        Ok(Self {
            config,
            store,
            cookies,
            state: AuthStateHandle::new(),
            bus: EventBus::default(),
        })
    }

    /// Process-wide event bus; other token-bearing flows publish here.
    pub fn event_bus(&self) -> EventBus {
        self.bus.clone()
    }

    /// Run one bootstrap pass against the given page URL.
    pub async fn run(&self, page_url: &str) -> AppResult<()> {
        let mut url = Url::parse(page_url)?;

        let listener = spawn_invalid_token_listener(&self.bus, self.state.clone());

        let api = WsAuthorize::new(self.store.clone(), self.config.api_settings());
        let bootstrapper = Bootstrapper::new(
            self.store.clone(),
            self.cookies.clone(),
            self.state.clone(),
            self.config.api.app_id,
        );
        bootstrapper.run(&mut url, &api).await;

        // The language parameter is consumed by the host shell; drop it from
        // the visible URL along with the processed login parameters.
        strip_params(&mut url, &["lang".to_string()]);
        info!(url = %url, "Page URL after bootstrap");

        let view = resolve_view(&self.state);
        match &view {
            BootstrapView::Loading => warn!("Bootstrap ended while still loading"),
            BootstrapView::AuthErrorPage { header, message, cta_label } => {
                warn!(%header, %message, %cta_label, "Auth error page shown");
            }
            BootstrapView::ErrorModal { message } => {
                warn!(%message, "Error modal shown");
            }
            BootstrapView::App => info!("Bootstrap complete, rendering application"),
        }

        let header_state = derive_header_state(&self.state, self.store.as_ref());
        match render_header(&header_state, self.store.as_ref()) {
            Some(render) => info!(section = ?render.account_section, "Header rendered"),
            None => info!("Header hidden"),
        }

        listener.abort();
        Ok(())
    }

    /// The auth-error recovery action, for the host to invoke on the CTA.
    pub fn recover_from_auth_error(&self, origin: &Url) -> AppResult<()> {
        tradehub_session::recover_from_auth_error(
            self.store.as_ref(),
            &LoggingNavigator,
            origin,
        )?;
        Ok(())
    }
}

/// Project the bootstrap result onto the header's externally-owned state.
///
/// In the full platform these flags come from the API base and client
/// stores; the standalone binary derives them from the finished bootstrap.
fn derive_header_state(state: &AuthStateHandle, store: &dyn KeyValueStore) -> HeaderState {
    let active_loginid = store.get(ACTIVE_LOGINID);
    HeaderState {
        is_authenticating: !state.completed(),
        is_authorized: state.outcome() == AuthOutcome::None && active_loginid.is_some(),
        active_loginid,
        ..Default::default()
    }
}
