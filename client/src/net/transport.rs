//! Request building and response normalization for every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same `Transport` runs in the browser (talking to the relay) and on the
//! relay server (talking to the backend). What differs per context is injected:
//! the `HttpClient` that executes requests and the `CredentialSource` that
//! supplies the bearer token.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into `TransportResult::failure()` (or a caller
//! supplied fallback). The underlying `TransportError` is logged here and
//! never crosses the envelope boundary.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde_json::Value;

use super::credential::CredentialSource;
use super::types::TransportResult;

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully built request, ready for an `HttpClient`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send ambient cookies along with the request (fetch `credentials: include`).
    pub include_credentials: bool,
}

impl OutgoingRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What an `HttpClient` hands back before any JSON parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    /// Every `Set-Cookie` header value, in response order.
    pub set_cookies: Vec<String>,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Executes a built request. One implementation per execution context.
#[cfg_attr(feature = "hydrate", async_trait::async_trait(?Send))]
#[cfg_attr(not(feature = "hydrate"), async_trait::async_trait)]
pub trait HttpClient {
    async fn execute(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError>;
}

/// Normalized result plus the cookies the backend asked to set.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    pub result: TransportResult,
    pub set_cookies: Vec<String>,
}

impl TransportResponse {
    fn fallback(result: TransportResult) -> Self {
        Self { result, set_cookies: Vec::new() }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

pub const DEFAULT_AUTH_SCHEME: &str = "Bearer";
pub const DEFAULT_CREDENTIAL_COOKIE: &str = "Authorization";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    /// Scheme placed before the token in the `Authorization` header.
    pub auth_scheme: String,
    /// Cookie that holds the token.
    pub credential_cookie: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            auth_scheme: DEFAULT_AUTH_SCHEME.to_owned(),
            credential_cookie: DEFAULT_CREDENTIAL_COOKIE.to_owned(),
        }
    }
}

/// Header value for `credential` under `scheme`.
///
/// Backends that store the whole header value in the cookie (`"Bearer abc"`)
/// are passed through rather than prefixed twice.
#[must_use]
pub fn authorization_value(scheme: &str, credential: &str) -> String {
    if scheme.is_empty() {
        return credential.to_owned();
    }
    match credential.strip_prefix(scheme) {
        Some(rest) if rest.starts_with(' ') => credential.to_owned(),
        _ => format!("{scheme} {credential}"),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

pub struct Transport<'a, C: ?Sized, S: ?Sized> {
    client: &'a C,
    credentials: &'a S,
    config: &'a TransportConfig,
}

impl<'a, C, S> Transport<'a, C, S>
where
    C: HttpClient + ?Sized,
    S: CredentialSource + ?Sized,
{
    pub fn new(client: &'a C, credentials: &'a S, config: &'a TransportConfig) -> Self {
        Self { client, credentials, config }
    }

    /// Build the outgoing request for `url`.
    ///
    /// Non-GET verbs always carry a JSON body; a missing body is sent as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Encode`] if the body cannot be serialized.
    pub fn build_request(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> Result<OutgoingRequest, TransportError> {
        let mut headers = Vec::new();
        if let Some(credential) = self.credentials.resolve(&self.config.credential_cookie) {
            headers.push((
                "Authorization".to_owned(),
                authorization_value(&self.config.auth_scheme, &credential),
            ));
        }

        let body = if method == HttpMethod::Get {
            None
        } else {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
            let encoded = match body {
                Some(value) => serde_json::to_string(value),
                None => serde_json::to_string(&Value::Object(serde_json::Map::new())),
            };
            Some(encoded.map_err(|e| TransportError::Encode(e.to_string()))?)
        };

        Ok(OutgoingRequest { method, url: url.to_owned(), headers, body, include_credentials: true })
    }

    /// Call a backend endpoint and wrap its JSON body in the envelope.
    pub async fn send_request(&self, url: &str, method: HttpMethod, body: Option<&Value>) -> TransportResponse {
        self.send_or(url, method, body, TransportResult::failure).await
    }

    /// Like [`Self::send_request`], with a caller-chosen failure envelope.
    pub async fn send_or(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&Value>,
        fallback: fn() -> TransportResult,
    ) -> TransportResponse {
        match self.exchange(url, method, body).await {
            Ok(raw) => match serde_json::from_str::<Value>(&raw.body) {
                Ok(data) => TransportResponse {
                    result: TransportResult::new(raw.status, raw.status_text, data),
                    set_cookies: raw.set_cookies,
                },
                Err(e) => {
                    log::warn!("{} {url}: status {} with non-JSON body: {e}", method.as_str(), raw.status);
                    TransportResponse::fallback(fallback())
                }
            },
            Err(e) => {
                log::error!("{} {url} failed: {e}", method.as_str());
                TransportResponse::fallback(fallback())
            }
        }
    }

    /// Call a relay endpoint, whose body already is an envelope.
    pub async fn send_to_relay(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&Value>,
        fallback: fn() -> TransportResult,
    ) -> TransportResult {
        match self.exchange(url, method, body).await {
            Ok(raw) => match serde_json::from_str::<TransportResult>(&raw.body) {
                Ok(result) => result,
                Err(e) => {
                    log::warn!("{} {url}: status {} without envelope: {e}", method.as_str(), raw.status);
                    fallback()
                }
            },
            Err(e) => {
                log::error!("{} {url} failed: {e}", method.as_str());
                fallback()
            }
        }
    }

    async fn exchange(&self, url: &str, method: HttpMethod, body: Option<&Value>) -> Result<RawResponse, TransportError> {
        let request = self.build_request(url, method, body)?;
        self.client.execute(request).await
    }
}
