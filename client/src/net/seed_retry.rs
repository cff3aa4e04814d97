//! Read-with-seed fallback for list panels.
//!
//! DESIGN
//! ======
//! A failed first read triggers one seed request, then exactly one more read.
//! The sequence is an explicit phase machine so "at most two reads, at most
//! one seed" is a property of the transitions, not of nested error handling.
//! Seed failures are logged and never change the flow.

#[cfg(test)]
#[path = "seed_retry_test.rs"]
mod seed_retry_test;

use super::api::{HotelApi, ListResource};
use super::error::ApiError;
use super::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    First,
    Retry,
}

/// Where a list load currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchPhase {
    Read(Attempt),
    Seed,
    Done,
}

impl FetchPhase {
    #[must_use]
    pub fn start() -> Self {
        Self::Read(Attempt::First)
    }

    /// Transition after a read failed.
    #[must_use]
    pub fn on_read_failed(self) -> Self {
        match self {
            Self::Read(Attempt::First) => Self::Seed,
            Self::Read(Attempt::Retry) | Self::Seed | Self::Done => Self::Done,
        }
    }

    /// Transition once the seed request settled, whatever its outcome.
    #[must_use]
    pub fn on_seed_settled(self) -> Self {
        match self {
            Self::Seed => Self::Read(Attempt::Retry),
            other => other,
        }
    }
}

/// Load `R`, seeding once and re-reading if the first read fails.
///
/// # Errors
///
/// The error of the final read when both reads failed.
pub async fn load_with_seed<R, T>(api: &HotelApi<T>) -> Result<Vec<R>, ApiError>
where
    R: ListResource,
    T: Transport,
{
    let mut phase = FetchPhase::start();
    let mut last_error = ApiError::Unavailable;
    loop {
        match phase {
            FetchPhase::Read(attempt) => match api.list::<R>().await {
                Ok(items) => return Ok(items),
                Err(e) => {
                    log::warn!("reading {} failed ({attempt:?}): {e}", R::NOUN);
                    last_error = e;
                    phase = phase.on_read_failed();
                }
            },
            FetchPhase::Seed => {
                if let Err(e) = api.seed::<R>().await {
                    log::warn!("seeding {} failed: {e}", R::NOUN);
                }
                phase = phase.on_seed_settled();
            }
            FetchPhase::Done => return Err(last_error),
        }
    }
}
