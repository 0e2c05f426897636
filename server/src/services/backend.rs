//! Backend authentication API: paths and the `reqwest` HTTP client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Relay handlers never talk to `reqwest` directly. They build a `Transport`
//! over whatever `HttpClient` the `AppState` carries, which is
//! `ReqwestClient` in production and a recording mock in tests.

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use std::time::Duration;

use accounts_client::net::transport::{HttpClient, HttpMethod, OutgoingRequest, RawResponse, TransportError};
use accounts_client::net::types::AccountRequest;
use reqwest::header::SET_COOKIE;

use crate::config::BackendTimeouts;

pub const IS_LOGIN_PATH: &str = "/api/is_login/";
pub const LOGIN_PATH: &str = "/api/login/";
pub const SIGNUP_PATH: &str = "/api/signup/";
pub const CURRENT_USER_PATH: &str = "/api/users/me";

#[must_use]
pub fn update_path(user_id: u64) -> String {
    format!("/api/update/{user_id}")
}

/// Backend method and path for a submission.
#[must_use]
pub fn route_for(request: &AccountRequest) -> (HttpMethod, String) {
    match request {
        AccountRequest::Login(_) => (HttpMethod::Post, LOGIN_PATH.to_owned()),
        AccountRequest::Signup(_) => (HttpMethod::Post, SIGNUP_PATH.to_owned()),
        AccountRequest::Update { user_id, .. } => (HttpMethod::Patch, update_path(*user_id)),
    }
}

/// Shared `reqwest` client with the configured timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new(timeouts: BackendTimeouts) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()?;
        Ok(Self { client })
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self.client.request(reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_owned)
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            set_cookies,
            body,
        })
    }
}
