//! Typed failures for backend requests.
//!
//! Every panel receives the same `ApiError` and picks its own display policy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a backend request did not produce a usable payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("transport failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("backend responded with status {0}")]
    Status(u16),
    /// The body could not be decoded into the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// No browser transport in this build (server rendering, native tests).
    #[error("backend not reachable from this environment")]
    Unavailable,
}

impl ApiError {
    /// Short copy shown to guests when a panel chooses to surface a failure.
    #[must_use]
    pub fn guest_message(&self) -> &'static str {
        match self {
            Self::Transport(_) | Self::Unavailable => "We couldn't reach the hotel right now.",
            Self::Status(status) if *status >= 500 => "The hotel service is having trouble.",
            Self::Status(_) | Self::Decode(_) => "The hotel sent an unexpected reply.",
        }
    }
}
