//! Concierge panel state.
//!
//! Each ask takes a ticket. Only the newest ticket may settle the panel, so a
//! slow earlier reply cannot overwrite a later one.

#[cfg(test)]
#[path = "concierge_test.rs"]
mod concierge_test;

use crate::net::error::ApiError;
use crate::net::types::ConciergeResponse;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConciergeState {
    pub response: Option<ConciergeResponse>,
    pub busy: bool,
    pub error: Option<ApiError>,
    latest_ticket: u64,
}

impl ConciergeState {
    /// Mark a new ask in flight and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.busy = true;
        self.latest_ticket
    }

    /// Apply a reply. Returns `false` when the ticket is stale and nothing changed.
    pub fn settle(&mut self, ticket: u64, outcome: Result<ConciergeResponse, ApiError>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        self.busy = false;
        match outcome {
            Ok(resp) => {
                self.response = Some(resp);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        true
    }
}
