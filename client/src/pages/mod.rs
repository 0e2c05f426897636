//! Routed pages and the glue that runs flows from them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render on the server and hydrate in the browser. Requests are only
//! issued after hydration, through the relay client.

pub mod home;
pub mod login;
pub mod signup;
pub mod update;

use leptos::prelude::*;

use crate::flow::{FlowKind, SubmissionFlow};
#[cfg(feature = "hydrate")]
use crate::flow::{SubmitOutcome, outcome_banner};
use crate::state::form::FormField;
#[cfg(feature = "hydrate")]
use crate::net::browser::{BrowserRelayClient, relay_client};

/// Banner text a page is currently showing.
pub type BannerSignal = RwSignal<Option<&'static str>>;

/// Run a submission in the browser and surface its banner.
#[cfg(feature = "hydrate")]
pub(crate) fn spawn_submit<F, Fut>(banner: BannerSignal, run: F)
where
    F: FnOnce(BrowserRelayClient) -> Fut + 'static,
    Fut: std::future::Future<Output = SubmitOutcome> + 'static,
{
    leptos::task::spawn_local(async move {
        let outcome = run(relay_client()).await;
        if !matches!(outcome, SubmitOutcome::Abandoned | SubmitOutcome::Ignored) {
            banner.set(outcome_banner(&outcome));
        }
    });
}

/// Current value of `field` in the flow's draft.
pub(crate) fn field_value<K: FlowKind>(flow: &SubmissionFlow<K>, field: FormField) -> Signal<String> {
    let form = flow.form();
    Signal::derive(move || form.with(|draft| draft.get(field).to_owned()))
}

/// Validation messages for `field`.
pub(crate) fn field_messages<K: FlowKind>(flow: &SubmissionFlow<K>, field: FormField) -> Signal<Vec<String>> {
    let validation = flow.validation();
    Signal::derive(move || validation.with(|state| state.messages(field).to_vec()))
}

/// Input handler that edits `field`.
pub(crate) fn field_editor<K: FlowKind>(flow: &SubmissionFlow<K>, field: FormField) -> Callback<String> {
    let flow = flow.clone();
    Callback::new(move |value: String| flow.edit(field, value))
}
