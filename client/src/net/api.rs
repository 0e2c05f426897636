//! Account API as seen from the browser: the relay endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Flows depend on the `AccountsApi` trait, not on HTTP. `RelayClient` is the
//! production implementation; tests substitute a recording fake.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::credential::CredentialSource;
use super::transport::{HttpClient, HttpMethod, Transport};
use super::types::{AccountRequest, TransportResult};
use crate::config::ClientConfig;

pub const LOGIN_CHECK_PATH: &str = "/api/login/check";
pub const LOGIN_PATH: &str = "/api/login";
pub const SIGNUP_PATH: &str = "/api/signup";
pub const CURRENT_USER_PATH: &str = "/api/users/me";

/// Relay path for updating user `user_id`.
#[must_use]
pub fn update_path(user_id: u64) -> String {
    format!("/api/users/{user_id}")
}

/// Relay method and path for a submission.
#[must_use]
pub fn relay_route(request: &AccountRequest) -> (HttpMethod, String) {
    match request {
        AccountRequest::Login(_) => (HttpMethod::Post, LOGIN_PATH.to_owned()),
        AccountRequest::Signup(_) => (HttpMethod::Post, SIGNUP_PATH.to_owned()),
        AccountRequest::Update { user_id, .. } => (HttpMethod::Patch, update_path(*user_id)),
    }
}

/// Operations the account flows need from the outside world.
#[cfg_attr(feature = "hydrate", async_trait::async_trait(?Send))]
#[cfg_attr(not(feature = "hydrate"), async_trait::async_trait)]
pub trait AccountsApi {
    /// Envelope whose `data.loginFlg` says whether the visitor is signed in.
    async fn check_login(&self) -> TransportResult;
    /// Envelope whose `data.userId` identifies the signed-in user.
    async fn current_user(&self) -> TransportResult;
    /// Send a login, signup, or update form.
    async fn submit(&self, request: &AccountRequest) -> TransportResult;
}

/// `AccountsApi` over the relay server.
pub struct RelayClient<C, S> {
    http: C,
    credentials: S,
    config: ClientConfig,
}

impl<C, S> RelayClient<C, S>
where
    C: HttpClient,
    S: CredentialSource,
{
    pub fn new(http: C, credentials: S, config: ClientConfig) -> Self {
        Self { http, credentials, config }
    }

    fn transport(&self) -> Transport<'_, C, S> {
        Transport::new(&self.http, &self.credentials, &self.config.transport)
    }
}

#[cfg_attr(feature = "hydrate", async_trait::async_trait(?Send))]
#[cfg_attr(not(feature = "hydrate"), async_trait::async_trait)]
impl<C, S> AccountsApi for RelayClient<C, S>
where
    C: HttpClient + Sync,
    S: CredentialSource + Sync,
{
    async fn check_login(&self) -> TransportResult {
        let url = self.config.relay_url(LOGIN_CHECK_PATH);
        self.transport()
            .send_to_relay(&url, HttpMethod::Get, None, TransportResult::login_check_failure)
            .await
    }

    async fn current_user(&self) -> TransportResult {
        let url = self.config.relay_url(CURRENT_USER_PATH);
        self.transport()
            .send_to_relay(&url, HttpMethod::Get, None, TransportResult::failure)
            .await
    }

    async fn submit(&self, request: &AccountRequest) -> TransportResult {
        let (method, path) = relay_route(request);
        let url = self.config.relay_url(&path);
        let body = request.body();
        self.transport()
            .send_to_relay(&url, method, Some(&body), TransportResult::failure)
            .await
    }
}
