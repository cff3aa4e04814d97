//! Networking modules for the hotel backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues typed REST calls through a `transport`, `seed_retry` wraps list
//! reads with the seed fallback, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod seed_retry;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_transport;
