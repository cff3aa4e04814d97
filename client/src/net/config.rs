//! Backend base URL resolution.
//!
//! The browser bundle bakes `HOTEL_BACKEND_URL` in at compile time, the same
//! way a JS bundler inlines environment values. Unset means a local backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base URL every panel request is issued against.
#[must_use]
pub fn backend_url() -> String {
    resolve_backend_url(option_env!("HOTEL_BACKEND_URL"))
}

fn resolve_backend_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_owned()
}
