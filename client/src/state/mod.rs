//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Form and validation state belong to one flow each; only `session` is
//! global and provided through context.

pub mod form;
pub mod session;
pub mod validation;
