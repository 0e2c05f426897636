//! Browser HTTP execution via `gloo-net`.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use super::api::RelayClient;
use super::credential::BrowserSource;
use super::transport::{HttpClient, HttpMethod, OutgoingRequest, RawResponse, TransportError};
use crate::config::ClientConfig;

/// `fetch`-backed client. The browser hides `Set-Cookie`, so none are reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooClient {
    async fn execute(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        if request.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let outgoing = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(RawResponse {
            status: response.status(),
            status_text: response.status_text(),
            set_cookies: Vec::new(),
            body,
        })
    }
}

pub type BrowserRelayClient = RelayClient<GlooClient, BrowserSource>;

/// Relay client for the hydrated app, configured from build-time env.
#[must_use]
pub fn relay_client() -> BrowserRelayClient {
    RelayClient::new(GlooClient, BrowserSource, ClientConfig::from_build_env())
}
