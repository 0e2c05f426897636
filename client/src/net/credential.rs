//! Cookie-backed credential lookup.
//!
//! DESIGN
//! ======
//! Shared code never asks "am I in the browser?". The hosting entry point
//! picks a `CredentialSource` when it builds the transport: `BrowserSource`
//! in the hydrated app, the request-scoped source on the relay server.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use cookie::Cookie;

/// Looks up the token stored under a cookie name.
pub trait CredentialSource {
    /// Returns `None` when the cookie is absent, which is the anonymous case.
    fn resolve(&self, key: &str) -> Option<String>;
}

/// Find `key` in a `Cookie:`-style header string (`a=1; b=2`).
///
/// Values are percent-decoded and stripped of surrounding quotes. Empty
/// values count as absent.
#[must_use]
pub fn find_cookie(header: &str, key: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == key)
        .map(|cookie| cookie.value_trimmed().to_owned())
        .filter(|value| !value.is_empty())
}

/// Reads `document.cookie` in the hydrated browser app.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSource;

#[cfg(feature = "hydrate")]
impl CredentialSource for BrowserSource {
    fn resolve(&self, key: &str) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html.cookie().ok()?;
        find_cookie(&cookies, key)
    }
}
