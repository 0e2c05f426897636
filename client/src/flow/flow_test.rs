use futures::executor::block_on;
use leptos::prelude::*;
use serde_json::json;

use super::login::LoginFlow;
use super::session_check::refresh_session;
use super::signup::SignupFlow;
use super::update::{UpdateFlow, resolve_user_id, submit_update};
use super::*;
use crate::net::types::{LoginPayload, UpdatePayload};
use crate::test_helpers::{FakeApi, RecordingNavigator};

fn in_owner<T>(test: impl FnOnce() -> T) -> T {
    Owner::new().with(test)
}

fn filled_login(session: SessionFlag) -> LoginFlow {
    let flow = LoginFlow::new(session, ActiveFlag::new());
    flow.edit(FormField::Email, "a@b.com");
    flow.edit(FormField::Password, "pw");
    flow
}

// =============================================================================
// Login
// =============================================================================

#[test]
fn successful_login_sets_flag_resets_form_and_goes_home() {
    in_owner(|| {
        let session = SessionFlag::new();
        let flow = filled_login(session);
        let api = FakeApi::replying(TransportResult::new(200, "OK", json!({})));
        let nav = RecordingNavigator::default();

        let outcome = block_on(flow.submit(&api, &nav, ()));

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert!(session.read_untracked());
        assert_eq!(flow.form().get_untracked(), FormDraft::default());
        assert_eq!(nav.visits(), vec!["/".to_owned()]);
        assert_eq!(
            api.submitted(),
            vec![AccountRequest::Login(LoginPayload { email: "a@b.com".into(), password: "pw".into() })]
        );
        assert!(!flow.busy().get_untracked());
    });
}

#[test]
fn empty_login_is_invalid_without_a_request() {
    in_owner(|| {
        let session = SessionFlag::new();
        let flow = LoginFlow::new(session, ActiveFlag::new());
        let api = FakeApi::replying(TransportResult::new(200, "OK", json!({})));
        let nav = RecordingNavigator::default();

        let outcome = block_on(flow.submit(&api, &nav, ()));

        assert_eq!(outcome, SubmitOutcome::Invalid);
        let validation = flow.validation().get_untracked();
        assert_eq!(validation.email, vec!["email required".to_owned()]);
        assert_eq!(validation.password, vec!["password required".to_owned()]);
        assert!(validation.user_name.is_empty());
        assert!(api.submitted().is_empty());
        assert!(nav.visits().is_empty());
        assert!(!session.read_untracked());
    });
}

#[test]
fn login_rejection_clears_fields_the_body_omits() {
    in_owner(|| {
        let session = SessionFlag::new();
        let flow = filled_login(session);
        let api = FakeApi::replying(TransportResult::new(401, "Unauthorized", json!({ "detail": "bad" })));
        let nav = RecordingNavigator::default();

        let outcome = block_on(flow.submit(&api, &nav, ()));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(flow.validation().get_untracked().is_valid());
        assert!(!session.read_untracked());
        assert_eq!(flow.form().get_untracked().email, "a@b.com");
    });
}

#[test]
fn unexpected_status_is_an_unhandled_failure() {
    in_owner(|| {
        let session = SessionFlag::new();
        let flow = filled_login(session);
        let api = FakeApi::replying(TransportResult::failure());
        let nav = RecordingNavigator::default();

        let outcome = block_on(flow.submit(&api, &nav, ()));

        assert_eq!(outcome, SubmitOutcome::UnhandledFailure(TransportResult::failure()));
        assert_eq!(outcome_banner(&outcome), Some(GENERIC_FAILURE_BANNER));
        assert!(!session.read_untracked());
        assert!(nav.visits().is_empty());
    });
}

#[test]
fn reply_after_unmount_writes_nothing() {
    in_owner(|| {
        let session = SessionFlag::new();
        let active = ActiveFlag::new();
        let flow = LoginFlow::new(session, active.clone());
        flow.edit(FormField::Email, "a@b.com");
        flow.edit(FormField::Password, "pw");
        active.deactivate();
        let api = FakeApi::replying(TransportResult::new(200, "OK", json!({})));
        let nav = RecordingNavigator::default();

        let outcome = block_on(flow.submit(&api, &nav, ()));

        assert_eq!(outcome, SubmitOutcome::Abandoned);
        assert!(!session.is_resolved());
        assert!(nav.visits().is_empty());
        assert_eq!(flow.form().get_untracked().email, "a@b.com");
    });
}

#[test]
fn submit_while_busy_is_ignored() {
    in_owner(|| {
        let flow = filled_login(SessionFlag::new());
        flow.busy().set(true);
        let api = FakeApi::replying(TransportResult::new(200, "OK", json!({})));
        let nav = RecordingNavigator::default();

        assert_eq!(block_on(flow.submit(&api, &nav, ())), SubmitOutcome::Ignored);
        assert!(api.submitted().is_empty());
    });
}

// =============================================================================
// Signup
// =============================================================================

#[test]
fn signup_conflict_merges_backend_messages() {
    in_owner(|| {
        let session = SessionFlag::new();
        let flow = SignupFlow::new(session, ActiveFlag::new());
        flow.edit(FormField::UserName, "alice");
        flow.edit(FormField::Email, "a@b.com");
        flow.edit(FormField::Password, "pw");
        let api = FakeApi::replying(TransportResult::new(
            409,
            "Conflict",
            json!({ "username": ["already taken"] }),
        ));
        let nav = RecordingNavigator::default();

        let outcome = block_on(flow.submit(&api, &nav, ()));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        let validation = flow.validation().get_untracked();
        assert_eq!(validation.user_name, vec!["already taken".to_owned()]);
        assert!(validation.email.is_empty());
        assert!(validation.password.is_empty());
        assert!(!session.read_untracked());
        assert!(nav.visits().is_empty());
    });
}

#[test]
fn signup_success_requires_created() {
    in_owner(|| {
        let session = SessionFlag::new();
        let flow = SignupFlow::new(session, ActiveFlag::new());
        flow.edit(FormField::UserName, "alice");
        flow.edit(FormField::Email, "a@b.com");
        flow.edit(FormField::Password, "pw");
        let nav = RecordingNavigator::default();

        let ok = FakeApi::replying(TransportResult::new(200, "OK", json!({})));
        assert!(matches!(block_on(flow.submit(&ok, &nav, ())), SubmitOutcome::UnhandledFailure(_)));

        let created = FakeApi::replying(TransportResult::new(201, "Created", json!({})));
        assert_eq!(block_on(flow.submit(&created, &nav, ())), SubmitOutcome::Succeeded);
        assert!(session.read_untracked());
    });
}

#[test]
fn long_username_is_rejected_locally() {
    in_owner(|| {
        let flow = SignupFlow::new(SessionFlag::new(), ActiveFlag::new());
        flow.edit(FormField::UserName, "a".repeat(16));
        flow.edit(FormField::Email, "a@b.com");
        flow.edit(FormField::Password, "pw");
        let api = FakeApi::replying(TransportResult::new(201, "Created", json!({})));

        let outcome = block_on(flow.submit(&api, &RecordingNavigator::default(), ()));

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(flow.validation().get_untracked().user_name, vec!["username too long".to_owned()]);
        assert!(api.submitted().is_empty());
    });
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn update_without_user_id_is_refused() {
    in_owner(|| {
        let session = SessionFlag::new();
        session.write(true);
        let flow = UpdateFlow::new(session, ActiveFlag::new());
        flow.edit(FormField::UserName, "alice");
        flow.edit(FormField::Email, "a@b.com");
        let api = FakeApi::replying(TransportResult::new(200, "OK", json!({})));

        let outcome = block_on(submit_update(&flow, &api, &RecordingNavigator::default(), None));

        assert_eq!(outcome, SubmitOutcome::Refused);
        assert_eq!(outcome_banner(&outcome), Some(SIGN_IN_AGAIN_BANNER));
        assert!(api.submitted().is_empty());
    });
}

#[test]
fn update_targets_resolved_user() {
    in_owner(|| {
        let session = SessionFlag::new();
        let flow = UpdateFlow::new(session, ActiveFlag::new());
        flow.edit(FormField::UserName, "alice");
        flow.edit(FormField::Email, "a@b.com");
        let api = FakeApi::replying(TransportResult::new(200, "OK", json!({})));
        let nav = RecordingNavigator::default();

        let outcome = block_on(submit_update(&flow, &api, &nav, Some(7)));

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(
            api.submitted(),
            vec![AccountRequest::Update {
                user_id: 7,
                payload: UpdatePayload { username: "alice".into(), email: "a@b.com".into() },
            }]
        );
        assert_eq!(nav.visits(), vec!["/".to_owned()]);
    });
}

#[test]
fn user_id_resolution_rejects_negative_and_missing_ids() {
    let mut api = FakeApi::replying(TransportResult::failure());
    api.current_user = TransportResult::new(200, "OK", json!({ "userId": -1 }));
    assert_eq!(block_on(resolve_user_id(&api)), None);

    api.current_user = TransportResult::new(200, "OK", json!({ "userId": 12 }));
    assert_eq!(block_on(resolve_user_id(&api)), Some(12));

    api.current_user = TransportResult::failure();
    assert_eq!(block_on(resolve_user_id(&api)), None);
    assert_eq!(api.user_lookups(), 3);
}

// =============================================================================
// Session check
// =============================================================================

#[test]
fn session_check_writes_login_flag() {
    in_owner(|| {
        let session = SessionFlag::new();
        let mut api = FakeApi::replying(TransportResult::failure());
        api.login_check = TransportResult::new(200, "OK", json!({ "loginFlg": true }));

        assert!(block_on(refresh_session(&api, session, &ActiveFlag::new())));
        assert!(session.read_untracked());
        assert!(session.is_resolved());
    });
}

#[test]
fn failed_session_check_counts_as_signed_out() {
    in_owner(|| {
        let session = SessionFlag::new();
        let api = FakeApi::replying(TransportResult::failure());

        assert!(!block_on(refresh_session(&api, session, &ActiveFlag::new())));
        assert_eq!(session.snapshot_untracked(), crate::state::session::SessionSnapshot {
            authenticated: false,
            resolved: true,
        });
    });
}

#[test]
fn session_check_after_unmount_leaves_flag_alone() {
    in_owner(|| {
        let session = SessionFlag::new();
        let mut api = FakeApi::replying(TransportResult::failure());
        api.login_check = TransportResult::new(200, "OK", json!({ "loginFlg": true }));
        let active = ActiveFlag::new();
        active.deactivate();

        let _ = block_on(refresh_session(&api, session, &active));
        assert!(!session.is_resolved());
    });
}

#[test]
fn closures_navigate_with_default_options() {
    let seen = std::cell::RefCell::new(Vec::new());
    let navigate = |path: &str, _options: NavigateOptions| seen.borrow_mut().push(path.to_owned());
    navigate.navigate_to("/");
    assert_eq!(seen.into_inner(), vec!["/".to_owned()]);
}
