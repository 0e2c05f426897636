//! Mount-liveness tracking for async work started by a page.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Shared "still mounted" bit. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A flag that flips to inactive when the current reactive owner is cleaned up.
    #[must_use]
    pub fn for_current_owner() -> Self {
        let flag = Self::new();
        let on_unmount = flag.clone();
        on_cleanup(move || on_unmount.deactivate());
        flag
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn deactivate(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for ActiveFlag {
    fn default() -> Self {
        Self::new()
    }
}
