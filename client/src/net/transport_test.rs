use super::*;
use futures::executor::block_on;
use serde_json::json;

use crate::net::types::GENERIC_FAILURE_MESSAGE;
use crate::test_helpers::MockHttp;

// =============================================================================
// Fixtures
// =============================================================================

struct Jar(Option<&'static str>);

impl CredentialSource for Jar {
    fn resolve(&self, key: &str) -> Option<String> {
        assert_eq!(key, DEFAULT_CREDENTIAL_COOKIE);
        self.0.map(str::to_owned)
    }
}

// =============================================================================
// Request building
// =============================================================================

#[test]
fn get_has_no_body_and_no_content_type() {
    let http = MockHttp::replying(200, "OK", "{}");
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let request = transport.build_request("http://api/x", HttpMethod::Get, Some(&json!({ "a": 1 }))).unwrap();
    assert_eq!(request.body, None);
    assert_eq!(request.header("Content-Type"), None);
    assert_eq!(request.header("Authorization"), None);
    assert!(request.include_credentials);
}

#[test]
fn post_serializes_json_body() {
    let http = MockHttp::replying(200, "OK", "{}");
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let request = transport.build_request("http://api/x", HttpMethod::Post, Some(&json!({ "a": 1 }))).unwrap();
    assert_eq!(request.body.as_deref(), Some(r#"{"a":1}"#));
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[test]
fn non_get_without_body_sends_empty_object() {
    let http = MockHttp::replying(200, "OK", "{}");
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let request = transport.build_request("http://api/x", HttpMethod::Patch, None).unwrap();
    assert_eq!(request.body.as_deref(), Some("{}"));
}

#[test]
fn credential_is_attached_with_scheme() {
    let http = MockHttp::replying(200, "OK", "{}");
    let config = TransportConfig { auth_scheme: "JWT".to_owned(), ..TransportConfig::default() };
    let jar = Jar(Some("tok"));
    let transport = Transport::new(&http, &jar, &config);
    let request = transport.build_request("http://api/x", HttpMethod::Get, None).unwrap();
    assert_eq!(request.header("Authorization"), Some("JWT tok"));
}

#[test]
fn authorization_value_does_not_double_prefix() {
    assert_eq!(authorization_value("Bearer", "abc"), "Bearer abc");
    assert_eq!(authorization_value("Bearer", "Bearer abc"), "Bearer abc");
    assert_eq!(authorization_value("Bearer", "Bearerabc"), "Bearer Bearerabc");
    assert_eq!(authorization_value("", "abc"), "abc");
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn success_wraps_status_and_body() {
    let http = MockHttp::replying(200, "OK", r#"{"a":1}"#);
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let response = block_on(transport.send_request("http://api/x", HttpMethod::Get, None));
    assert_eq!(response.result, TransportResult::new(200, "OK", json!({ "a": 1 })));
    assert_eq!(http.last().url, "http://api/x");
}

#[test]
fn error_status_is_passed_through() {
    let http = MockHttp::replying(409, "Conflict", r#"{"username":["taken"]}"#);
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let response = block_on(transport.send_request("http://api/x", HttpMethod::Post, None));
    assert_eq!(response.result.http_status, 409);
    assert_eq!(response.result.field_messages("username"), vec!["taken".to_owned()]);
}

#[test]
fn network_error_yields_fixed_fallback() {
    let http = MockHttp::failing("connection refused: secret detail");
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let response = block_on(transport.send_request("http://api/x", HttpMethod::Post, None));
    assert_eq!(response.result.http_status, 500);
    assert_eq!(response.result.status_text, "Internal Server Error");
    assert_eq!(response.result.data, json!({ "message": GENERIC_FAILURE_MESSAGE }));
    assert!(response.set_cookies.is_empty());
}

#[test]
fn non_json_body_yields_fixed_fallback() {
    let http = MockHttp::replying(502, "Bad Gateway", "<html>oops</html>");
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let response = block_on(transport.send_request("http://api/x", HttpMethod::Get, None));
    assert_eq!(response.result, TransportResult::failure());
}

#[test]
fn send_or_uses_custom_fallback() {
    let http = MockHttp::failing("down");
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let response = block_on(transport.send_or(
        "http://api/x",
        HttpMethod::Get,
        None,
        TransportResult::login_check_failure,
    ));
    assert_eq!(response.result, TransportResult::login_check_failure());
}

#[test]
fn set_cookies_survive_normalization() {
    let http = MockHttp::with_reply(Ok(RawResponse {
        status: 201,
        status_text: "Created".to_owned(),
        set_cookies: vec!["Authorization=Bearer x; HttpOnly".to_owned(), "refresh=y".to_owned()],
        body: "{}".to_owned(),
    }));
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let response = block_on(transport.send_request("http://api/x", HttpMethod::Post, None));
    assert_eq!(response.set_cookies.len(), 2);
}

#[test]
fn relay_envelope_is_unwrapped() {
    let http = MockHttp::replying(200, "OK", r#"{"httpStatus":401,"statusText":"Unauthorized","data":{}}"#);
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let result = block_on(transport.send_to_relay("/api/login", HttpMethod::Post, None, TransportResult::failure));
    assert_eq!(result, TransportResult::new(401, "Unauthorized", json!({})));
}

#[test]
fn relay_body_without_envelope_falls_back() {
    let http = MockHttp::replying(422, "Unprocessable Entity", r#"{"error":"bad json"}"#);
    let config = TransportConfig::default();
    let jar = Jar(None);
    let transport = Transport::new(&http, &jar, &config);
    let result = block_on(transport.send_to_relay("/api/login", HttpMethod::Post, None, TransportResult::failure));
    assert_eq!(result, TransportResult::failure());
}
