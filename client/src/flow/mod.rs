//! Login, signup and update submission orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own a `SubmissionFlow<K>` and call `submit` from an event handler.
//! The flow validates locally, sends at most one request through
//! `AccountsApi`, then applies the outcome to form, validation and session
//! state. What differs per flow lives in its `FlowKind`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures arrive as ordinary `TransportResult`s. Anything that is
//! neither the success status nor a known rejection comes back as
//! `SubmitOutcome::UnhandledFailure` so the page can show a banner.

pub mod login;
pub mod session_check;
pub mod signup;
pub mod update;

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::marker::PhantomData;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::AccountsApi;
use crate::net::types::{AccountRequest, TransportResult};
use crate::state::form::{FormDraft, FormField};
use crate::state::session::SessionFlag;
use crate::state::validation::ValidationState;
use crate::util::lifecycle::ActiveFlag;

pub const GENERIC_FAILURE_BANNER: &str = "Something went wrong. Please try again.";
pub const SIGN_IN_AGAIN_BANNER: &str = "We could not confirm your account. Please sign in again.";

/// Where a flow goes after it succeeds.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, path: &str) {
        self(path, NavigateOptions::default());
    }
}

/// Per-flow constants and request shape.
pub trait FlowKind: 'static {
    /// Extra input the request needs beyond the draft.
    type Target;

    const NAME: &'static str;
    const FIELDS: &'static [FormField];
    const SUCCESS_STATUS: u16;
    const REJECTED_STATUSES: &'static [u16];
    const SUCCESS_ROUTE: &'static str = "/";

    fn request(draft: &FormDraft, target: Self::Target) -> AccountRequest;
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Local checks failed; nothing was sent.
    Invalid,
    Succeeded,
    /// The backend rejected the fields; messages were merged.
    Rejected,
    /// Neither success nor a known rejection.
    UnhandledFailure(TransportResult),
    /// A precondition was missing; nothing was sent.
    Refused,
    /// The page unmounted before the reply arrived; nothing was written.
    Abandoned,
    /// A submit was already in flight.
    Ignored,
}

/// Banner text the hosting page shows for `outcome`.
#[must_use]
pub fn outcome_banner(outcome: &SubmitOutcome) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::UnhandledFailure(_) => Some(GENERIC_FAILURE_BANNER),
        SubmitOutcome::Refused => Some(SIGN_IN_AGAIN_BANNER),
        _ => None,
    }
}

pub struct SubmissionFlow<K> {
    form: RwSignal<FormDraft>,
    validation: RwSignal<ValidationState>,
    busy: RwSignal<bool>,
    session: SessionFlag,
    active: ActiveFlag,
    kind: PhantomData<fn() -> K>,
}

impl<K> Clone for SubmissionFlow<K> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            validation: self.validation,
            busy: self.busy,
            session: self.session,
            active: self.active.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: FlowKind> SubmissionFlow<K> {
    pub fn new(session: SessionFlag, active: ActiveFlag) -> Self {
        Self {
            form: RwSignal::new(FormDraft::default()),
            validation: RwSignal::new(ValidationState::default()),
            busy: RwSignal::new(false),
            session,
            active,
            kind: PhantomData,
        }
    }

    #[must_use]
    pub fn form(&self) -> RwSignal<FormDraft> {
        self.form
    }

    #[must_use]
    pub fn validation(&self) -> RwSignal<ValidationState> {
        self.validation
    }

    /// `true` while a request is in flight.
    #[must_use]
    pub fn busy(&self) -> RwSignal<bool> {
        self.busy
    }

    pub fn edit(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.form.update(|draft| draft.edit(field, value));
    }

    /// Validate, send, and apply the reply.
    pub async fn submit<A, N>(&self, api: &A, navigator: &N, target: K::Target) -> SubmitOutcome
    where
        A: AccountsApi + ?Sized,
        N: Navigator + ?Sized,
    {
        if self.busy.get_untracked() {
            return SubmitOutcome::Ignored;
        }

        let draft = self.form.get_untracked();
        let checked = ValidationState::check(&draft, K::FIELDS);
        let valid = checked.is_valid();
        self.validation.set(checked);
        if !valid {
            return SubmitOutcome::Invalid;
        }

        self.busy.set(true);
        let result = api.submit(&K::request(&draft, target)).await;
        if !self.active.is_active() {
            log::debug!("{} reply after unmount ignored: status {}", K::NAME, result.http_status);
            return SubmitOutcome::Abandoned;
        }
        self.busy.set(false);

        if result.http_status == K::SUCCESS_STATUS {
            self.session.write(true);
            self.form.update(FormDraft::reset);
            navigator.navigate_to(K::SUCCESS_ROUTE);
            SubmitOutcome::Succeeded
        } else if K::REJECTED_STATUSES.contains(&result.http_status) {
            self.validation.set(ValidationState::from_rejection(&result, K::FIELDS));
            SubmitOutcome::Rejected
        } else {
            log::error!("{} failed: {} {}", K::NAME, result.http_status, result.status_text);
            SubmitOutcome::UnhandledFailure(result)
        }
    }
}
