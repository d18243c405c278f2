//! The session bootstrap sequence.
//!
//! Runs once per page load. At most one token-validation round trip; no
//! retries. Every failure is terminal for this pass and surfaces as one of
//! two error categories on the shared auth state.

use crate::api::AuthorizeApi;
use crate::error::SessionResult;
use crate::override_guard::ServerOverride;
use crate::state::{AuthStateHandle, AUTH_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE};
use std::sync::Arc;
use tradehub_core::{is_production_app_id, parse_login_params, raw_param, strip_params};
use tradehub_core::endpoints::PRODUCTION_VALIDATION_HOST;
use tradehub_storage::keys::{
    ACCOUNT_TYPE, ACTIVE_LOGINID, AUTH_TOKEN, CLIENT_COUNTRY, LOGGED_STATE_COOKIE,
};
use tradehub_storage::{clear_auth_data, CookieJar, KeyValueStore};
use tracing::{debug, info, warn};
use url::Url;

/// Session bootstrapper.
///
/// Owns no state beyond its collaborators; all outcomes land in storage and
/// on the [`AuthStateHandle`].
pub struct Bootstrapper {
    store: Arc<dyn KeyValueStore>,
    cookies: Arc<dyn CookieJar>,
    state: AuthStateHandle,
    app_id: u32,
}

impl Bootstrapper {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        cookies: Arc<dyn CookieJar>,
        state: AuthStateHandle,
        app_id: u32,
    ) -> Self {
        Self {
            store,
            cookies,
            state,
            app_id,
        }
    }

    /// Run the bootstrap sequence against the current page URL.
    ///
    /// Completion is signalled on every exit path; failures that escape the
    /// sequence classify as generic errors.
    pub async fn run(&self, page_url: &mut Url, api: &impl AuthorizeApi) {
        if let Err(e) = self.establish_session(page_url, api).await {
            warn!(error = %e, "Session bootstrap failed");
            self.state.record_other_error(GENERIC_ERROR_MESSAGE);
        }
        self.state.mark_completed();
    }

    async fn establish_session(
        &self,
        page_url: &mut Url,
        api: &impl AuthorizeApi,
    ) -> SessionResult<()> {
        let raw_token = raw_param(page_url, "token");
        let account_type = raw_param(page_url, "account_type");

        // account_type persists whenever it arrives alongside a raw token,
        // independent of how validation turns out.
        if let (Some(_), Some(account_type)) = (&raw_token, &account_type) {
            self.store.set(ACCOUNT_TYPE, account_type)?;
        }

        let parsed = parse_login_params(page_url);
        let Some(primary) = parsed.primary().cloned() else {
            debug!("No login parameters in URL, skipping validation");
            return Ok(());
        };

        strip_params(page_url, &parsed.params_to_delete);

        // Production app ids without an explicit account type validate
        // against the production host. The guard removes the override on
        // every exit path below.
        let override_guard = if is_production_app_id(self.app_id) && account_type.is_none() {
            info!("Using production validation host for this call");
            Some(ServerOverride::apply(
                self.store.clone(),
                PRODUCTION_VALIDATION_HOST,
            )?)
        } else {
            None
        };

        let response = api.authorize(&primary.token).await;
        drop(override_guard);
        let response = response?;

        if let Some(error) = response.error {
            if error.is_invalid_token() {
                warn!(code = %error.code, "Token rejected as invalid");
                self.state.record_invalid_token(AUTH_ERROR_MESSAGE);
                if self.cookies.get(LOGGED_STATE_COOKIE).as_deref() == Some("false") {
                    clear_auth_data(self.store.as_ref())?;
                }
            } else {
                warn!(code = %error.code, "Authorize failed");
                self.state.record_other_error(GENERIC_ERROR_MESSAGE);
            }
            return Ok(());
        }

        if let Some(authorize) = response.authorize {
            self.store.set(CLIENT_COUNTRY, &authorize.country)?;

            if let Some(first) = authorize.account_list.first() {
                if let Some(entry) = parsed
                    .login_info
                    .iter()
                    .find(|login| login.loginid == first.loginid)
                {
                    self.store.set(AUTH_TOKEN, &entry.token)?;
                    self.store.set(ACTIVE_LOGINID, &entry.loginid)?;
                    info!(loginid = %entry.loginid, "Session established");
                    return Ok(());
                }
            }
        }

        // No account matched the parsed entries: keep the primary token so a
        // later authorize can still use it, but leave no active loginid.
        warn!("No matching account for returned list, persisting primary token only");
        self.store.set(AUTH_TOKEN, &primary.token)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthOutcome;
    use parking_lot::Mutex;
    use tradehub_storage::keys::{SERVER_URL_OVERRIDE, SESSION_TOKEN};
    use tradehub_storage::{MemoryCookieJar, MemoryStore};
    use tradehub_ws::{AccountEntry, ApiError, ApiResponse, AuthorizeData, WsError};

    /// Stub authorize API: returns a canned reply and records the override
    /// key as seen at call time.
    struct StubApi {
        reply: Mutex<Option<Result<ApiResponse, WsError>>>,
        store: Arc<MemoryStore>,
        seen_override: Mutex<Option<String>>,
        calls: Mutex<u32>,
    }

    impl StubApi {
        fn new(store: Arc<MemoryStore>, reply: Result<ApiResponse, WsError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                store,
                seen_override: Mutex::new(None),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock()
        }
    }

    impl AuthorizeApi for StubApi {
        async fn authorize(&self, _token: &str) -> Result<ApiResponse, WsError> {
            *self.calls.lock() += 1;
            *self.seen_override.lock() = self.store.get(SERVER_URL_OVERRIDE);
            self.reply.lock().take().expect("authorize called twice")
        }
    }

    fn success_reply(country: &str, loginids: &[&str]) -> Result<ApiResponse, WsError> {
        Ok(ApiResponse {
            msg_type: Some("authorize".to_string()),
            req_id: Some(1),
            authorize: Some(AuthorizeData {
                country: country.to_string(),
                account_list: loginids
                    .iter()
                    .map(|id| AccountEntry {
                        loginid: id.to_string(),
                        currency: None,
                        is_virtual: None,
                    })
                    .collect(),
            }),
            error: None,
        })
    }

    fn error_reply(code: &str) -> Result<ApiResponse, WsError> {
        Ok(ApiResponse {
            msg_type: Some("authorize".to_string()),
            req_id: Some(1),
            authorize: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: String::new(),
            }),
        })
    }

    fn transport_error() -> Result<ApiResponse, WsError> {
        Err(WsError::StreamEnded)
    }

    struct Fixture {
        store: Arc<MemoryStore>,
        state: AuthStateHandle,
        bootstrapper: Bootstrapper,
    }

    fn fixture(app_id: u32, cookies: MemoryCookieJar) -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let state = AuthStateHandle::new();
        let bootstrapper = Bootstrapper::new(
            store.clone(),
            Arc::new(cookies),
            state.clone(),
            app_id,
        );
        Fixture {
            store,
            state,
            bootstrapper,
        }
    }

    fn page(query: &str) -> Url {
        Url::parse(&format!("https://bot.example.com/?{query}")).unwrap()
    }

    const STAGING_APP_ID: u32 = 29934;
    const PRODUCTION_APP_ID: u32 = 65555;

    #[tokio::test]
    async fn no_login_info_completes_without_touching_storage() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), transport_error());
        let mut url = page("lang=EN");

        f.bootstrapper.run(&mut url, &api).await;

        assert!(f.state.completed());
        assert_eq!(f.state.outcome(), AuthOutcome::None);
        assert!(f.store.snapshot().is_empty());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn account_type_persisted_even_without_login_info() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), transport_error());
        let mut url = page("token=raw&account_type=real");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.store.get(ACCOUNT_TYPE).as_deref(), Some("real"));
        assert_eq!(f.store.snapshot().len(), 1);
        assert!(f.state.completed());
        assert_eq!(f.state.outcome(), AuthOutcome::None);
    }

    #[tokio::test]
    async fn account_type_needs_raw_token_alongside() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &["CR1"]));
        let mut url = page("acct1=CR1&token1=a1-one&account_type=real");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.store.get(ACCOUNT_TYPE), None);
    }

    #[tokio::test]
    async fn processed_params_are_stripped_from_url() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &["CR1"]));
        let mut url = page("acct1=CR1&token1=a1-one&cur1=USD&lang=EN");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(url.query(), Some("lang=EN"));
    }

    #[tokio::test]
    async fn matching_account_persists_active_session() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &["VRTC2", "CR1"]));
        let mut url = page("acct1=CR1&token1=a1-one&acct2=VRTC2&token2=a1-two");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.store.get(CLIENT_COUNTRY).as_deref(), Some("br"));
        assert_eq!(f.store.get(AUTH_TOKEN).as_deref(), Some("a1-two"));
        assert_eq!(f.store.get(ACTIVE_LOGINID).as_deref(), Some("VRTC2"));
        assert!(f.state.completed());
        assert_eq!(f.state.outcome(), AuthOutcome::None);
    }

    #[tokio::test]
    async fn no_match_persists_first_token_only() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &["MF9"]));
        let mut url = page("acct1=CR1&token1=a1-one&acct2=VRTC2&token2=a1-two");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.store.get(AUTH_TOKEN).as_deref(), Some("a1-one"));
        assert_eq!(f.store.get(ACTIVE_LOGINID), None);
        assert_eq!(f.state.outcome(), AuthOutcome::None);
    }

    #[tokio::test]
    async fn empty_account_list_falls_back_to_first_token() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &[]));
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.store.get(AUTH_TOKEN).as_deref(), Some("a1-one"));
        assert_eq!(f.store.get(ACTIVE_LOGINID), None);
    }

    #[tokio::test]
    async fn invalid_token_with_logged_out_cookie_clears_auth_data() {
        let jar = MemoryCookieJar::new().with(LOGGED_STATE_COOKIE, "false");
        let f = fixture(STAGING_APP_ID, jar);
        f.store.set(AUTH_TOKEN, "stale").unwrap();
        f.store.set(SESSION_TOKEN, "stale").unwrap();
        let api = StubApi::new(f.store.clone(), error_reply("InvalidToken"));
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.state.outcome(), AuthOutcome::InvalidToken);
        assert!(f.state.completed());
        assert_eq!(f.store.get(AUTH_TOKEN), None);
        assert_eq!(f.store.get(SESSION_TOKEN), None);
    }

    #[tokio::test]
    async fn invalid_token_with_other_cookie_keeps_storage() {
        let jar = MemoryCookieJar::new().with(LOGGED_STATE_COOKIE, "true");
        let f = fixture(STAGING_APP_ID, jar);
        f.store.set(AUTH_TOKEN, "kept").unwrap();
        let api = StubApi::new(f.store.clone(), error_reply("InvalidToken"));
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.state.outcome(), AuthOutcome::InvalidToken);
        assert_eq!(f.store.get(AUTH_TOKEN).as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn absent_cookie_does_not_clear_storage() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        f.store.set(AUTH_TOKEN, "kept").unwrap();
        let api = StubApi::new(f.store.clone(), error_reply("InvalidToken"));
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.store.get(AUTH_TOKEN).as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn other_error_code_is_generic_and_non_destructive() {
        let jar = MemoryCookieJar::new().with(LOGGED_STATE_COOKIE, "false");
        let f = fixture(STAGING_APP_ID, jar);
        f.store.set(AUTH_TOKEN, "kept").unwrap();
        let api = StubApi::new(f.store.clone(), error_reply("RateLimit"));
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.state.outcome(), AuthOutcome::OtherError);
        assert!(f.state.completed());
        assert_eq!(f.store.get(AUTH_TOKEN).as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn transport_error_is_generic_and_non_destructive() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        f.store.set(AUTH_TOKEN, "kept").unwrap();
        let api = StubApi::new(f.store.clone(), transport_error());
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(f.state.outcome(), AuthOutcome::OtherError);
        assert!(f.state.completed());
        assert_eq!(f.store.get(AUTH_TOKEN).as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn production_app_id_sets_override_during_call_only() {
        let f = fixture(PRODUCTION_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &["CR1"]));
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(
            api.seen_override.lock().as_deref(),
            Some(PRODUCTION_VALIDATION_HOST)
        );
        assert_eq!(f.store.get(SERVER_URL_OVERRIDE), None);
    }

    #[tokio::test]
    async fn explicit_account_type_skips_override() {
        let f = fixture(PRODUCTION_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &["CR1"]));
        let mut url = page("token=raw&account_type=real&acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(*api.seen_override.lock(), None);
        assert_eq!(f.store.get(SERVER_URL_OVERRIDE), None);
    }

    #[tokio::test]
    async fn staging_app_id_never_sets_override() {
        let f = fixture(STAGING_APP_ID, MemoryCookieJar::new());
        let api = StubApi::new(f.store.clone(), success_reply("br", &["CR1"]));
        let mut url = page("acct1=CR1&token1=a1-one");

        f.bootstrapper.run(&mut url, &api).await;

        assert_eq!(*api.seen_override.lock(), None);
    }

    #[tokio::test]
    async fn override_absent_after_every_outcome() {
        for reply in [
            success_reply("br", &["CR1"]),
            error_reply("InvalidToken"),
            error_reply("RateLimit"),
            transport_error(),
        ] {
            let f = fixture(PRODUCTION_APP_ID, MemoryCookieJar::new());
            let api = StubApi::new(f.store.clone(), reply);
            let mut url = page("acct1=CR1&token1=a1-one");

            f.bootstrapper.run(&mut url, &api).await;

            assert_eq!(f.store.get(SERVER_URL_OVERRIDE), None);
            assert!(f.state.completed());
        }
    }
}
