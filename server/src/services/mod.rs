//! Outbound integrations.

pub mod backend;
