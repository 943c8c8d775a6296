//! Wire payloads that have no domain type of their own

use serde_json::Value;

use shopdesk_core::prelude::*;
use shopdesk_core::{id_from_value, SessionToken, UserId};

/// Body returned by `POST /auth/login`.
///
/// The shape is owned by the server; the console keeps the whole document
/// (it is persisted verbatim under the `user` key) and only reads the token.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub raw: Value,
}

impl LoginResponse {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Session token carried by the response, from `token` or `accessToken`.
    pub fn token(&self) -> Option<SessionToken> {
        ["token", "accessToken"]
            .iter()
            .filter_map(|key| self.raw.get(key))
            .filter_map(Value::as_str)
            .find(|s| !s.is_empty())
            .map(SessionToken::new)
    }

    /// JSON text stored under the `user` key
    pub fn to_json_string(&self) -> String {
        self.raw.to_string()
    }
}

/// Extract `user.id` from a `GET /auth/auth-check` body.
pub fn parse_auth_check(body: &Value) -> Result<UserId> {
    body.get("user")
        .and_then(|user| user.get("id"))
        .and_then(id_from_value)
        .map(UserId::new)
        .ok_or_else(|| Error::decode("auth-check response has no user.id"))
}
