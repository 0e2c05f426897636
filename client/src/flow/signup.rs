//! New account registration.

use super::{FlowKind, SubmissionFlow};
use crate::net::types::{AccountRequest, SignupPayload};
use crate::state::form::{FormDraft, FormField};

pub struct Signup;

impl FlowKind for Signup {
    type Target = ();

    const NAME: &'static str = "signup";
    const FIELDS: &'static [FormField] = &[FormField::UserName, FormField::Email, FormField::Password];
    const SUCCESS_STATUS: u16 = 201;
    const REJECTED_STATUSES: &'static [u16] = &[400, 409];

    fn request(draft: &FormDraft, (): ()) -> AccountRequest {
        AccountRequest::Signup(SignupPayload {
            username: draft.user_name.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
        })
    }
}

pub type SignupFlow = SubmissionFlow<Signup>;
