//! Profile update page for the signed-in user.
//!
//! The user id is fetched once on mount. Submitting before it resolves is
//! refused and the page asks the user to sign in again.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{BannerSignal, field_editor, field_messages, field_value};
use crate::components::failure_banner::FailureBanner;
use crate::components::form_item::FormItem;
use crate::flow::update::UpdateFlow;
use crate::state::form::FormField;
use crate::state::session::use_session;
use crate::util::auth::{GuardPolicy, install_session_guard};
use crate::util::lifecycle::ActiveFlag;

#[component]
pub fn UpdatePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_session_guard(session, GuardPolicy::RequireAuthenticated, navigate.clone());

    let active = ActiveFlag::for_current_owner();
    let flow = UpdateFlow::new(session, active.clone());
    let banner: BannerSignal = RwSignal::new(None);
    let busy = flow.busy();
    let user_id = RwSignal::new(None::<u64>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::browser::relay_client();
        let resolved = crate::flow::update::resolve_user_id(&api).await;
        if active.is_active() {
            user_id.set(resolved);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = active;

    let on_submit = {
        let flow = flow.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            #[cfg(feature = "hydrate")]
            {
                let flow = flow.clone();
                let navigate = navigate.clone();
                let target = user_id.get_untracked();
                super::spawn_submit(banner, move |api| async move {
                    crate::flow::update::submit_update(&flow, &api, &navigate, target).await
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&flow, &navigate, user_id);
        }
    };

    view! {
        <div class="account-page">
            <h1>"Update your profile"</h1>
            <FailureBanner message=banner/>
            <form class="account-form" on:submit=on_submit novalidate=true>
                <FormItem
                    id="username"
                    label="Username"
                    value=field_value(&flow, FormField::UserName)
                    messages=field_messages(&flow, FormField::UserName)
                    on_input=field_editor(&flow, FormField::UserName)
                />
                <FormItem
                    id="email"
                    label="Email"
                    input_type="email"
                    value=field_value(&flow, FormField::Email)
                    messages=field_messages(&flow, FormField::Email)
                    on_input=field_editor(&flow, FormField::Email)
                />
                <button class="btn account-form__submit" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
        </div>
    }
}
