//! Labeled input with its validation messages underneath.

use leptos::prelude::*;

/// One form row. Messages render in order, one line each.
#[component]
pub fn FormItem(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] messages: Signal<Vec<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-item" class:form-item--invalid=move || !messages.get().is_empty()>
            <label class="form-item__label" for=id>{label}</label>
            <input
                class="form-item__input"
                id=id
                name=id
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                messages
                    .get()
                    .into_iter()
                    .map(|message| view! { <p class="form-item__error">{message}</p> })
                    .collect_view()
            }}
        </div>
    }
}
