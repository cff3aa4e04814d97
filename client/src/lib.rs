//! # hotel-client
//!
//! Leptos + WASM front-end for the AR-Infused Hotel Universe landing page.
//!
//! This crate contains the page, its panels, per-panel state, the typed
//! backend client, and the browser helpers that load third-party viewers.
//! The `ssr` feature renders it inside `hotel-server`; `hydrate` builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
