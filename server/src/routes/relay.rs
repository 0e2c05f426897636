//! Relay endpoints between the browser and the backend API.
//!
//! Every handler answers HTTP 200 with the normalized envelope as its body;
//! the backend's status travels inside it. Backend `Set-Cookie` headers are
//! re-attached one by one, unmodified.

use accounts_client::net::transport::{HttpMethod, TransportResponse};
use accounts_client::net::types::{AccountRequest, LoginPayload, SignupPayload, TransportResult, UpdatePayload};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::credential::ServerRequestSource;
use crate::services::backend;
use crate::state::AppState;

/// `GET /api/login/check`
pub async fn login_check(State(state): State<AppState>, jar: CookieJar) -> Response {
    let credentials = ServerRequestSource::new(jar);
    let url = state.config.backend_url(backend::IS_LOGIN_PATH);
    let response = state
        .transport(&credentials)
        .send_or(&url, HttpMethod::Get, None, TransportResult::login_check_failure)
        .await;
    relay_response(backend::IS_LOGIN_PATH, response)
}

/// `GET /api/users/me`
pub async fn current_user(State(state): State<AppState>, jar: CookieJar) -> Response {
    let credentials = ServerRequestSource::new(jar);
    let url = state.config.backend_url(backend::CURRENT_USER_PATH);
    let response = state.transport(&credentials).send_request(&url, HttpMethod::Get, None).await;
    relay_response(backend::CURRENT_USER_PATH, response)
}

/// `POST /api/login`
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(payload): Json<LoginPayload>) -> Response {
    forward(&state, jar, &AccountRequest::Login(payload)).await
}

/// `POST /api/signup`
pub async fn signup(State(state): State<AppState>, jar: CookieJar, Json(payload): Json<SignupPayload>) -> Response {
    forward(&state, jar, &AccountRequest::Signup(payload)).await
}

/// `PATCH /api/users/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    jar: CookieJar,
    Json(payload): Json<UpdatePayload>,
) -> Response {
    forward(&state, jar, &AccountRequest::Update { user_id, payload }).await
}

async fn forward(state: &AppState, jar: CookieJar, request: &AccountRequest) -> Response {
    let credentials = ServerRequestSource::new(jar);
    let (method, path) = backend::route_for(request);
    let url = state.config.backend_url(&path);
    let body = request.body();
    let response = state.transport(&credentials).send_request(&url, method, Some(&body)).await;
    relay_response(&path, response)
}

fn relay_response(path: &str, response: TransportResponse) -> Response {
    let TransportResponse { result, set_cookies } = response;
    tracing::info!(path, status = result.http_status, cookies = set_cookies.len(), "relayed backend response");

    let mut headers = HeaderMap::new();
    for cookie in set_cookies {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                headers.append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(path, error = %e, "dropping unrepresentable Set-Cookie"),
        }
    }
    (StatusCode::OK, headers, Json(result)).into_response()
}
