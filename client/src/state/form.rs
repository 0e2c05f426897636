//! In-progress form values for one account flow.
//!
//! DESIGN
//! ======
//! Edits replace exactly one field and never validate; validation is an
//! explicit step run by the flow on submit. Each flow owns its own draft.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Fields an account form can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    UserName,
    Email,
    Password,
}

impl FormField {
    /// Key the backend uses for this field in request and error bodies.
    ///
    /// Note the client-side `user_name` travels as lowercase `username`.
    #[must_use]
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::UserName => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Field values of a login, signup, or update form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl FormDraft {
    /// Replace one field, leaving the others untouched.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Return every field to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::UserName => &self.user_name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::UserName => &mut self.user_name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }
}
