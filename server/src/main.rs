mod config;
mod credential;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::config::{ConfigError, RelayConfig};
use crate::services::backend::ReqwestClient;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("backend client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // .env is optional.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = RelayConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid relay configuration"))?;
    let port = config.port;
    tracing::info!(api_origin = %config.api_origin, auth_scheme = %config.transport.auth_scheme, "relay configured");

    let http = ReqwestClient::new(config.timeouts)?;
    let state = state::AppState::new(config, Arc::new(http));

    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "accounts relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
