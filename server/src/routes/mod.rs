//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the relay API and stitches it with Leptos SSR rendering
//! under a single Axum router. Compiled WASM and CSS are served from `/pkg`.

pub mod relay;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Relay routes called by the hydrated app.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/login/check", get(relay::login_check))
        .route("/api/login", post(relay::login))
        .route("/api/signup", post(relay::signup))
        .route("/api/users/me", get(relay::current_user))
        .route("/api/users/{id}", patch(relay::update))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(accounts_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || accounts_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
