//! Profile update for the signed-in user.
//!
//! The target user id comes from `/api/users/me`, fetched when the page
//! mounts. Until it resolves, submits are refused without a request.

use super::{FlowKind, Navigator, SubmissionFlow, SubmitOutcome};
use crate::net::api::AccountsApi;
use crate::net::types::{AccountRequest, UpdatePayload};
use crate::state::form::{FormDraft, FormField};

pub struct Update;

impl FlowKind for Update {
    type Target = u64;

    const NAME: &'static str = "update";
    const FIELDS: &'static [FormField] = &[FormField::UserName, FormField::Email];
    const SUCCESS_STATUS: u16 = 200;
    const REJECTED_STATUSES: &'static [u16] = &[400, 409];

    fn request(draft: &FormDraft, user_id: u64) -> AccountRequest {
        AccountRequest::Update {
            user_id,
            payload: UpdatePayload { username: draft.user_name.clone(), email: draft.email.clone() },
        }
    }
}

pub type UpdateFlow = SubmissionFlow<Update>;

/// The signed-in user's id, or `None` when the backend cannot say.
pub async fn resolve_user_id<A: AccountsApi + ?Sized>(api: &A) -> Option<u64> {
    let result = api.current_user().await;
    let user_id = result.user_id();
    if user_id.is_none() {
        log::warn!("current user unresolved: {} {}", result.http_status, result.status_text);
    }
    user_id
}

/// Submit the update form for `user_id`, refusing when it is unknown.
pub async fn submit_update<A, N>(flow: &UpdateFlow, api: &A, navigator: &N, user_id: Option<u64>) -> SubmitOutcome
where
    A: AccountsApi + ?Sized,
    N: Navigator + ?Sized,
{
    match user_id {
        Some(user_id) => flow.submit(api, navigator, user_id).await,
        None => {
            log::error!("update refused: user id not resolved");
            SubmitOutcome::Refused
        }
    }
}
