//! Per-field validation messages shown beneath form inputs.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::TransportResult;
use crate::state::form::{FormDraft, FormField};
use crate::util::validation::{check_email, check_password, check_user_name};

/// Ordered error messages per field. An empty list means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub user_name: Vec<String>,
    pub email: Vec<String>,
    pub password: Vec<String>,
}

impl ValidationState {
    /// Run the local checks for `fields` against `draft`.
    ///
    /// Fields outside `fields` come back empty.
    #[must_use]
    pub fn check(draft: &FormDraft, fields: &[FormField]) -> Self {
        let mut state = Self::default();
        for &field in fields {
            let value = draft.get(field);
            *state.messages_mut(field) = match field {
                FormField::UserName => check_user_name(value),
                FormField::Email => check_email(value),
                FormField::Password => check_password(value),
            };
        }
        state
    }

    /// Build the state for a backend rejection.
    ///
    /// Each of `fields` takes the backend's list for its wire key, or an
    /// empty list when the body omits it.
    #[must_use]
    pub fn from_rejection(result: &TransportResult, fields: &[FormField]) -> Self {
        let mut state = Self::default();
        for &field in fields {
            *state.messages_mut(field) = result.field_messages(field.wire_key());
        }
        state
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.user_name.is_empty() && self.email.is_empty() && self.password.is_empty()
    }

    #[must_use]
    pub fn messages(&self, field: FormField) -> &[String] {
        match field {
            FormField::UserName => &self.user_name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    fn messages_mut(&mut self, field: FormField) -> &mut Vec<String> {
        match field {
            FormField::UserName => &mut self.user_name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }
}
