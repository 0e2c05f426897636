//! Reusable UI components shared by the account pages.

pub mod failure_banner;
pub mod form_item;
