//! Wire message types for the authorize call.

use serde::{Deserialize, Serialize};

/// Error code signalling an invalid or expired token.
pub const INVALID_TOKEN_CODE: &str = "InvalidToken";

/// Authorize request.
///
/// Shape: `{"authorize": "<token>", "req_id": n}`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizeRequest {
    /// The login token being exchanged for a session.
    pub authorize: String,
    /// Request id echoed back in the reply.
    pub req_id: u64,
}

impl AuthorizeRequest {
    pub fn new(token: &str, req_id: u64) -> Self {
        Self {
            authorize: token.to_string(),
            req_id,
        }
    }
}

/// Reply envelope.
///
/// Success carries `authorize`, failure carries `error`; both carry
/// `msg_type: "authorize"` and echo `req_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub msg_type: Option<String>,
    #[serde(default)]
    pub req_id: Option<u64>,
    #[serde(default)]
    pub authorize: Option<AuthorizeData>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl ApiResponse {
    /// Whether this message answers the authorize request with the given id.
    pub fn answers(&self, req_id: u64) -> bool {
        self.req_id == Some(req_id)
            || self.msg_type.as_deref() == Some("authorize")
            || self.error.is_some()
    }
}

/// Session details returned on successful authorization.
///
/// Only the fields the bootstrap projects into storage are modeled; the
/// server sends more.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeData {
    /// Two-letter residence country.
    #[serde(default)]
    pub country: String,
    /// All accounts reachable with this token, primary first.
    #[serde(default)]
    pub account_list: Vec<AccountEntry>,
}

/// One entry of the returned account list.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountEntry {
    pub loginid: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub is_virtual: Option<u8>,
}

/// API-level error payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// Whether the error classifies as an invalid/expired token.
    pub fn is_invalid_token(&self) -> bool {
        self.code == INVALID_TOKEN_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_authorize_request() {
        let req = AuthorizeRequest::new("a1-secret", 1);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"authorize":"a1-secret","req_id":1}"#);
    }

    #[test]
    fn deserializes_success_reply() {
        let json = r#"{
            "authorize": {
                "country": "br",
                "account_list": [
                    {"loginid": "CR1", "currency": "USD", "is_virtual": 0},
                    {"loginid": "VRTC2", "currency": "USD", "is_virtual": 1}
                ]
            },
            "msg_type": "authorize",
            "req_id": 1
        }"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(resp.answers(1));
        assert!(resp.error.is_none());

        let data = resp.authorize.unwrap();
        assert_eq!(data.country, "br");
        assert_eq!(data.account_list[0].loginid, "CR1");
        assert_eq!(data.account_list[1].is_virtual, Some(1));
    }

    #[test]
    fn deserializes_error_reply() {
        let json = r#"{
            "error": {"code": "InvalidToken", "message": "The token is invalid."},
            "msg_type": "authorize",
            "req_id": 1
        }"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        let error = resp.error.unwrap();
        assert!(error.is_invalid_token());
        assert_eq!(error.message, "The token is invalid.");
    }

    #[test]
    fn unknown_error_code_is_not_invalid_token() {
        let error = ApiError {
            code: "RateLimit".to_string(),
            message: String::new(),
        };
        assert!(!error.is_invalid_token());
    }

    #[test]
    fn unrelated_message_does_not_answer() {
        let json = r#"{"msg_type": "ping", "req_id": 7}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.answers(1));
    }
}
