//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only read-only configuration and the shared backend HTTP client;
//! credentials are per request and never stored here.

use std::sync::Arc;

use accounts_client::net::transport::{HttpClient, Transport};

use crate::config::RelayConfig;
use crate::credential::ServerRequestSource;

pub type SharedHttpClient = Arc<dyn HttpClient + Send + Sync>;

/// Clone is required by Axum; all fields are `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub http: SharedHttpClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: RelayConfig, http: SharedHttpClient) -> Self {
        Self { config: Arc::new(config), http }
    }

    /// Transport for one inbound request.
    #[must_use]
    pub fn transport<'a>(
        &'a self,
        credentials: &'a ServerRequestSource,
    ) -> Transport<'a, dyn HttpClient + Send + Sync, ServerRequestSource> {
        Transport::new(&*self.http, credentials, &self.config.transport)
    }
}
