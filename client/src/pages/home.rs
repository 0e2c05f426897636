//! Landing page. Links depend on whether the visitor is signed in.

use leptos::prelude::*;

use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home-page">
            <h1>"Accounts"</h1>
            <Show
                when=move || session.read()
                fallback=|| {
                    view! {
                        <nav class="home-page__links">
                            <a href="/login">"Sign in"</a>
                            <a href="/signup">"Sign up"</a>
                        </nav>
                    }
                }
            >
                <p>"You are signed in."</p>
                <nav class="home-page__links">
                    <a href="/update">"Update your profile"</a>
                </nav>
            </Show>
        </div>
    }
}
