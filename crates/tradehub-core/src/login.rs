//! Login-parameter parsing from the page URL.
//!
//! After OAuth login the platform redirects back with indexed account
//! triplets in the query string: `acct1=CR123&token1=a1-...&cur1=USD&acct2=...`.
//! Each index where both `acctN` and `tokenN` are present yields one
//! [`LoginInfo`]; index order is preserved and the first entry is treated as
//! the primary login. The raw `token` and `account_type` parameters travel
//! outside the indexed scheme and are read separately.

use serde::{Deserialize, Serialize};
use url::Url;

/// A token/loginid pair extracted from the URL, used to request authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInfo {
    /// Account identifier (e.g. "CR123456", "VRTC98765").
    pub loginid: String,
    /// Login token exchanged for a session via the authorize call.
    pub token: String,
    /// Account currency, when present in the URL.
    pub currency: Option<String>,
}

/// Result of scanning the page URL for login parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLogin {
    /// Login entries in URL index order.
    pub login_info: Vec<LoginInfo>,
    /// Names of every matched query parameter, for stripping from the
    /// visible URL once processed.
    pub params_to_delete: Vec<String>,
}

impl ParsedLogin {
    /// The primary entry: first by URL index.
    pub fn primary(&self) -> Option<&LoginInfo> {
        self.login_info.first()
    }
}

/// Scan the URL query for indexed login triplets.
///
/// Scanning stops at the first index with neither `acctN` nor `tokenN`.
/// An index missing either half produces no entry but its present half is
/// still queued for deletion.
pub fn parse_login_params(url: &Url) -> ParsedLogin {
    let mut parsed = ParsedLogin::default();

    for index in 1.. {
        let acct_key = format!("acct{index}");
        let token_key = format!("token{index}");
        let cur_key = format!("cur{index}");

        let acct = raw_param(url, &acct_key);
        let token = raw_param(url, &token_key);
        let currency = raw_param(url, &cur_key);

        if acct.is_none() && token.is_none() {
            break;
        }

        if acct.is_some() {
            parsed.params_to_delete.push(acct_key);
        }
        if token.is_some() {
            parsed.params_to_delete.push(token_key);
        }
        if currency.is_some() {
            parsed.params_to_delete.push(cur_key);
        }

        if let (Some(loginid), Some(token)) = (acct, token) {
            parsed.login_info.push(LoginInfo {
                loginid,
                token,
                currency,
            });
        }
    }

    parsed
}

/// First value of a query parameter, if present.
pub fn raw_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Remove the named query parameters from the URL.
///
/// Idempotent; parameters not present are ignored. Clears the query entirely
/// when nothing remains so the visible URL carries no dangling `?`.
pub fn strip_params(url: &mut Url, names: &[String]) {
    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !names.iter().any(|name| name == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if remaining.is_empty() {
        url.set_query(None);
    } else {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &remaining {
            serializer.append_pair(key, value);
        }
        let query = serializer.finish();
        url.set_query(Some(&query));
    }
}
