//! Page-level banner for failures that belong to no single field.

use leptos::prelude::*;

#[component]
pub fn FailureBanner(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="failure-banner" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
