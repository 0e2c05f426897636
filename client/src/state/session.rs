//! Global authentication flag shared by every page.
//!
//! DESIGN
//! ======
//! `SessionFlag` wraps one signal and exposes a single mutator, `write`.
//! It starts unauthenticated and unresolved; the first write (from the
//! bootstrap login check or a successful submit) marks it resolved so
//! guards can tell "not yet known" apart from "known signed out".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// Point-in-time view of the flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    /// `true` once any write has happened.
    pub resolved: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct SessionFlag(RwSignal<SessionSnapshot>);

impl SessionFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(SessionSnapshot::default()))
    }

    /// Tracked read of the authenticated bit.
    #[must_use]
    pub fn read(&self) -> bool {
        self.0.get().authenticated
    }

    #[must_use]
    pub fn read_untracked(&self) -> bool {
        self.0.get_untracked().authenticated
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.0.get().resolved
    }

    /// Tracked read of both bits.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.0.get()
    }

    #[must_use]
    pub fn snapshot_untracked(&self) -> SessionSnapshot {
        self.0.get_untracked()
    }

    /// The only way to change the flag.
    pub fn write(&self, authenticated: bool) {
        self.0.set(SessionSnapshot { authenticated, resolved: true });
    }
}

impl Default for SessionFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the flag and provide it to the current render tree.
pub fn provide_session() -> SessionFlag {
    let session = SessionFlag::new();
    provide_context(session);
    session
}

/// The flag provided by the application root.
#[must_use]
pub fn use_session() -> SessionFlag {
    expect_context::<SessionFlag>()
}
