//! Build-time configuration for the browser app.
//!
//! Values come from `option_env!` at compile time, so the WASM bundle needs
//! no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::transport::TransportConfig;

/// Where the browser sends account requests and how it presents credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the relay server; empty means same origin.
    pub relay_origin: String,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Read `ACCOUNTS_RELAY_ORIGIN`, `ACCOUNTS_AUTH_HEADER_SCHEME` and
    /// `ACCOUNTS_AUTH_COOKIE_NAME` as captured at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ACCOUNTS_RELAY_ORIGIN"),
            option_env!("ACCOUNTS_AUTH_HEADER_SCHEME"),
            option_env!("ACCOUNTS_AUTH_COOKIE_NAME"),
        )
    }

    #[must_use]
    pub fn from_values(relay_origin: Option<&str>, auth_scheme: Option<&str>, cookie_name: Option<&str>) -> Self {
        let defaults = TransportConfig::default();
        let non_blank = |value: Option<&str>| value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        Self {
            relay_origin: relay_origin
                .map(|origin| origin.trim().trim_end_matches('/').to_owned())
                .unwrap_or_default(),
            transport: TransportConfig {
                auth_scheme: non_blank(auth_scheme).unwrap_or(defaults.auth_scheme),
                credential_cookie: non_blank(cookie_name).unwrap_or(defaults.credential_cookie),
            },
        }
    }

    /// Absolute (or same-origin) URL for a relay path.
    #[must_use]
    pub fn relay_url(&self, path: &str) -> String {
        format!("{}{path}", self.relay_origin)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
