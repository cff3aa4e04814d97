//! Binds async work to the lifetime of the panel that started it.
//!
//! Panels spawn fetches that can outlive them. The guard flips to dead in
//! `on_cleanup`, and late replies check it before touching disposed signals.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct PanelLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for PanelLifetime {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl PanelLifetime {
    /// Guard that ends when the current reactive owner is cleaned up.
    #[must_use]
    pub fn bind() -> Self {
        let lifetime = Self::default();
        let guard = lifetime.clone();
        leptos::prelude::on_cleanup(move || guard.end());
        lifetime
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the panel is still mounted. Returns whether it ran.
    pub fn run_if_alive(&self, apply: impl FnOnce()) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }
}
