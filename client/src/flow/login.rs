//! Email and password sign-in.

use super::{FlowKind, SubmissionFlow};
use crate::net::types::{AccountRequest, LoginPayload};
use crate::state::form::{FormDraft, FormField};

pub struct Login;

impl FlowKind for Login {
    type Target = ();

    const NAME: &'static str = "login";
    const FIELDS: &'static [FormField] = &[FormField::Email, FormField::Password];
    const SUCCESS_STATUS: u16 = 200;
    const REJECTED_STATUSES: &'static [u16] = &[400, 401, 404];

    fn request(draft: &FormDraft, (): ()) -> AccountRequest {
        AccountRequest::Login(LoginPayload { email: draft.email.clone(), password: draft.password.clone() })
    }
}

pub type LoginFlow = SubmissionFlow<Login>;
