//! # accounts-client
//!
//! Leptos frontend for account signup, login and profile update.
//!
//! This crate holds the pages, the submission flows behind them, shared
//! form and session state, and the transport core that the relay server
//! also links against.

pub mod app;
pub mod components;
pub mod config;
pub mod flow;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
