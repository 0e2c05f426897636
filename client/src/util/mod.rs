//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep guard, lifecycle and validation rules out of page
//! components so they can be tested without a browser.

pub mod auth;
pub mod lifecycle;
pub mod validation;
