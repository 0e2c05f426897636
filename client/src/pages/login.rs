//! Email and password sign-in page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{BannerSignal, field_editor, field_messages, field_value};
use crate::components::failure_banner::FailureBanner;
use crate::components::form_item::FormItem;
use crate::flow::login::LoginFlow;
use crate::state::form::FormField;
use crate::state::session::use_session;
use crate::util::auth::{GuardPolicy, install_session_guard};
use crate::util::lifecycle::ActiveFlag;

/// Login form. Signed-in visitors are sent home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_session_guard(session, GuardPolicy::RequireAnonymous, navigate.clone());

    let flow = LoginFlow::new(session, ActiveFlag::for_current_owner());
    let banner: BannerSignal = RwSignal::new(None);
    let busy = flow.busy();

    let on_submit = {
        let flow = flow.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            #[cfg(feature = "hydrate")]
            {
                let flow = flow.clone();
                let navigate = navigate.clone();
                super::spawn_submit(banner, move |api| async move { flow.submit(&api, &navigate, ()).await });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&flow, &navigate);
        }
    };

    view! {
        <div class="account-page">
            <h1>"Sign in"</h1>
            <FailureBanner message=banner/>
            <form class="account-form" on:submit=on_submit novalidate=true>
                <FormItem
                    id="email"
                    label="Email"
                    input_type="email"
                    value=field_value(&flow, FormField::Email)
                    messages=field_messages(&flow, FormField::Email)
                    on_input=field_editor(&flow, FormField::Email)
                />
                <FormItem
                    id="password"
                    label="Password"
                    input_type="password"
                    value=field_value(&flow, FormField::Password)
                    messages=field_messages(&flow, FormField::Password)
                    on_input=field_editor(&flow, FormField::Password)
                />
                <button class="btn account-form__submit" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
            <p class="account-page__switch">
                "No account yet? "
                <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
