//! Wire DTOs shared by the browser, the relay server, and the backend.
//!
//! DESIGN
//! ======
//! `TransportResult` is the one envelope every backend call resolves to.
//! Callers branch on `http_status` only; a failed call is still a value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Message carried by every synthesized failure envelope.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Normalized outcome of a backend call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportResult {
    /// HTTP status reported by the backend (or `500` when synthesized).
    pub http_status: u16,
    /// Reason phrase matching `http_status`.
    pub status_text: String,
    /// Parsed JSON body.
    pub data: Value,
}

impl TransportResult {
    pub fn new(http_status: u16, status_text: impl Into<String>, data: Value) -> Self {
        Self { http_status, status_text: status_text.into(), data }
    }

    /// Fixed envelope used whenever a call fails before a usable body exists.
    #[must_use]
    pub fn failure() -> Self {
        Self::new(500, "Internal Server Error", json!({ "message": GENERIC_FAILURE_MESSAGE }))
    }

    /// Failure envelope for the login check, which also reports `loginFlg: false`.
    #[must_use]
    pub fn login_check_failure() -> Self {
        Self::new(
            500,
            "Internal Server Error",
            json!({ "loginFlg": false, "message": GENERIC_FAILURE_MESSAGE }),
        )
    }

    /// Messages the backend attached to `key`.
    ///
    /// Accepts a list of strings or a single string; anything else is empty.
    #[must_use]
    pub fn field_messages(&self, key: &str) -> Vec<String> {
        match self.data.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            Some(Value::String(message)) => vec![message.clone()],
            _ => Vec::new(),
        }
    }

    /// `data.loginFlg`, treating a missing or non-boolean value as `false`.
    #[must_use]
    pub fn login_flag(&self) -> bool {
        self.data.get("loginFlg").and_then(Value::as_bool).unwrap_or(false)
    }

    /// `data.userId` when it is a non-negative integer.
    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.data.get("userId").and_then(Value::as_u64)
    }
}

/// `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// `POST /api/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `PATCH /api/users/{id}` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub username: String,
    pub email: String,
}

/// A form submission bound for the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountRequest {
    Login(LoginPayload),
    Signup(SignupPayload),
    Update { user_id: u64, payload: UpdatePayload },
}

impl AccountRequest {
    /// JSON body sent on the wire.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::Login(payload) => json!({ "email": payload.email, "password": payload.password }),
            Self::Signup(payload) => json!({
                "username": payload.username,
                "email": payload.email,
                "password": payload.password,
            }),
            Self::Update { payload, .. } => json!({ "username": payload.username, "email": payload.email }),
        }
    }
}
