//! Per-field form checks shared by every account flow.
//!
//! DESIGN
//! ======
//! Checks are independent `if` blocks so messages accumulate in check order.
//! No format or strength rules are applied; the backend owns those.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Longest accepted username, in characters.
pub const USER_NAME_MAX_CHARS: usize = 15;

pub const USER_NAME_REQUIRED: &str = "username required";
pub const USER_NAME_TOO_LONG: &str = "username too long";
pub const EMAIL_REQUIRED: &str = "email required";
pub const PASSWORD_REQUIRED: &str = "password required";

/// Validate a username: required, at most [`USER_NAME_MAX_CHARS`] characters.
pub fn check_user_name(value: &str) -> Vec<String> {
    let len = value.chars().count();
    let mut messages = Vec::new();
    if len == 0 {
        messages.push(USER_NAME_REQUIRED.to_owned());
    }
    if len > USER_NAME_MAX_CHARS {
        messages.push(USER_NAME_TOO_LONG.to_owned());
    }
    messages
}

/// Validate an email address: required only.
pub fn check_email(value: &str) -> Vec<String> {
    required(value, EMAIL_REQUIRED)
}

/// Validate a password: required only.
pub fn check_password(value: &str) -> Vec<String> {
    required(value, PASSWORD_REQUIRED)
}

fn required(value: &str, message: &str) -> Vec<String> {
    if value.is_empty() { vec![message.to_owned()] } else { Vec::new() }
}
