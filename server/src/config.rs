//! Relay configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use accounts_client::net::transport::{DEFAULT_AUTH_SCHEME, DEFAULT_CREDENTIAL_COOKIE, TransportConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("{var} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Backend origin without a trailing `/`.
    pub api_origin: String,
    pub transport: TransportConfig,
    pub port: u16,
    pub timeouts: BackendTimeouts,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Required:
    /// - `API_ORIGIN`: backend origin, e.g. `http://localhost:8000`
    ///
    /// Optional:
    /// - `JWT_AUTH_HEADER_TYPES`: authorization scheme, first token used (default `Bearer`)
    /// - `AUTH_COOKIE_NAME`: cookie holding the token (default `Authorization`)
    /// - `PORT`: default 3000
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 10
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `API_ORIGIN` is missing or not a URL, or
    /// `PORT` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_origin = non_blank("API_ORIGIN").ok_or(ConfigError::Missing { var: "API_ORIGIN" })?;
        let api_origin = parse_origin(&api_origin)?;

        let auth_scheme = non_blank("JWT_AUTH_HEADER_TYPES")
            .and_then(|v| v.split_whitespace().next().map(str::to_owned))
            .unwrap_or_else(|| DEFAULT_AUTH_SCHEME.to_owned());
        let credential_cookie = non_blank("AUTH_COOKIE_NAME").unwrap_or_else(|| DEFAULT_CREDENTIAL_COOKIE.to_owned());

        let port = match non_blank("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let timeouts = BackendTimeouts {
            request_secs: parse_u64_or(
                non_blank("BACKEND_REQUEST_TIMEOUT_SECS"),
                DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_u64_or(
                non_blank("BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self {
            api_origin,
            transport: TransportConfig { auth_scheme, credential_cookie },
            port,
            timeouts,
        })
    }

    /// Absolute backend URL for `path`.
    #[must_use]
    pub fn backend_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_origin)
    }
}

fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl { var: "API_ORIGIN", value: raw.to_owned() };
    let url = reqwest::Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_u64_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}
