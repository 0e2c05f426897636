//! Networking: wire types, transport normalization, credentials, and the
//! account API the flows call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is shared by the browser and the relay server. `browser` holds
//! the `gloo-net` client used only after hydration.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod credential;
pub mod transport;
pub mod types;
