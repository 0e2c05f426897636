//! Seeding the session flag from the relay's login check.

use crate::net::api::AccountsApi;
use crate::state::session::SessionFlag;
use crate::util::lifecycle::ActiveFlag;

/// Ask the relay whether the visitor is signed in and record the answer.
///
/// A failed check counts as signed out. Nothing is written once `active`
/// has been deactivated.
pub async fn refresh_session<A: AccountsApi + ?Sized>(api: &A, session: SessionFlag, active: &ActiveFlag) -> bool {
    let result = api.check_login().await;
    let signed_in = result.login_flag();
    if active.is_active() {
        session.write(signed_in);
    }
    signed_in
}
