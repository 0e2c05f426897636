//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage, update::UpdatePage};
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session flag and, once hydrated, seeds it from the relay's
/// login check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session();

    #[cfg(feature = "hydrate")]
    {
        let active = crate::util::lifecycle::ActiveFlag::for_current_owner();
        leptos::task::spawn_local(async move {
            let api = crate::net::browser::relay_client();
            let signed_in = crate::flow::session_check::refresh_session(&api, session, &active).await;
            log::debug!("session bootstrap: signed_in={signed_in}");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/accounts.css"/>
        <Title text="Accounts"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("update") view=UpdatePage/>
            </Routes>
        </Router>
    }
}
