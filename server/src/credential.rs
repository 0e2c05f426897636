//! Credential lookup on the relay server, scoped to one inbound request.

#[cfg(test)]
#[path = "credential_test.rs"]
mod tests;

use accounts_client::net::credential::CredentialSource;
use axum_extra::extract::cookie::CookieJar;

/// Reads the inbound request's cookies.
#[derive(Debug, Clone)]
pub struct ServerRequestSource(CookieJar);

impl ServerRequestSource {
    #[must_use]
    pub fn new(jar: CookieJar) -> Self {
        Self(jar)
    }
}

impl CredentialSource for ServerRequestSource {
    fn resolve(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .map(|cookie| cookie.value_trimmed().to_owned())
            .filter(|value| !value.is_empty())
    }
}
