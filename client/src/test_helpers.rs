//! Test doubles for the HTTP and account API seams.

use std::sync::Mutex;

use crate::net::api::AccountsApi;
use crate::net::types::{AccountRequest, TransportResult};
use crate::net::transport::{HttpClient, OutgoingRequest, RawResponse, TransportError};

// =============================================================================
// MockHttp
// =============================================================================

/// `HttpClient` that records every request and replays one canned reply.
pub struct MockHttp {
    reply: Result<RawResponse, String>,
    seen: Mutex<Vec<OutgoingRequest>>,
}

impl MockHttp {
    pub fn replying(status: u16, status_text: &str, body: &str) -> Self {
        Self::with_reply(Ok(RawResponse {
            status,
            status_text: status_text.to_owned(),
            set_cookies: Vec::new(),
            body: body.to_owned(),
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(message.to_owned()))
    }

    pub fn with_reply(reply: Result<RawResponse, String>) -> Self {
        Self { reply, seen: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> OutgoingRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[cfg_attr(feature = "hydrate", async_trait::async_trait(?Send))]
#[cfg_attr(not(feature = "hydrate"), async_trait::async_trait)]
impl HttpClient for MockHttp {
    async fn execute(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        self.reply.clone().map_err(TransportError::Network)
    }
}

// =============================================================================
// FakeApi
// =============================================================================

/// `AccountsApi` with scripted envelopes that records submissions.
pub struct FakeApi {
    pub login_check: TransportResult,
    pub current_user: TransportResult,
    pub submit_reply: TransportResult,
    submitted: Mutex<Vec<AccountRequest>>,
    user_lookups: Mutex<usize>,
}

impl FakeApi {
    pub fn replying(submit_reply: TransportResult) -> Self {
        Self {
            login_check: TransportResult::login_check_failure(),
            current_user: TransportResult::failure(),
            submit_reply,
            submitted: Mutex::new(Vec::new()),
            user_lookups: Mutex::new(0),
        }
    }

    pub fn submitted(&self) -> Vec<AccountRequest> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn user_lookups(&self) -> usize {
        *self.user_lookups.lock().unwrap()
    }
}

#[cfg_attr(feature = "hydrate", async_trait::async_trait(?Send))]
#[cfg_attr(not(feature = "hydrate"), async_trait::async_trait)]
impl AccountsApi for FakeApi {
    async fn check_login(&self) -> TransportResult {
        self.login_check.clone()
    }

    async fn current_user(&self) -> TransportResult {
        *self.user_lookups.lock().unwrap() += 1;
        self.current_user.clone()
    }

    async fn submit(&self, request: &AccountRequest) -> TransportResult {
        self.submitted.lock().unwrap().push(request.clone());
        self.submit_reply.clone()
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Records every path a flow navigates to.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl crate::flow::Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}
