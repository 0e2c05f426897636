//! Route guards driven by the session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and signup are for signed-out visitors; update is for signed-in
//! users. Each page installs one guard on mount, and the guard re-runs
//! whenever the flag changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionFlag, SessionSnapshot};

pub const HOME_ROUTE: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Leave when already signed in.
    RequireAnonymous,
    /// Leave once the flag is known to be signed out.
    RequireAuthenticated,
}

/// Where the guard sends the visitor, if anywhere.
#[must_use]
pub fn redirect_target(policy: GuardPolicy, snapshot: SessionSnapshot) -> Option<&'static str> {
    let leave = match policy {
        GuardPolicy::RequireAnonymous => snapshot.authenticated,
        GuardPolicy::RequireAuthenticated => snapshot.resolved && !snapshot.authenticated,
    };
    leave.then_some(HOME_ROUTE)
}

/// Redirect per `policy` now and on every later flag change.
pub fn install_session_guard<F>(session: SessionFlag, policy: GuardPolicy, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(policy, session.snapshot()) {
            log::debug!("session guard {policy:?}: redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
