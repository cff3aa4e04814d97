//! Booking quote panel state.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use crate::net::error::ApiError;
use crate::net::types::BookingQuote;

/// What the quote card should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteView {
    Calculating,
    Ready,
    Unavailable,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteState {
    pub quote: Option<BookingQuote>,
    pub error: Option<ApiError>,
}

impl QuoteState {
    pub fn settle(&mut self, outcome: Result<BookingQuote, ApiError>) {
        match outcome {
            Ok(quote) => {
                self.quote = Some(quote);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    #[must_use]
    pub fn view(&self) -> QuoteView {
        match (&self.quote, &self.error) {
            (Some(_), _) => QuoteView::Ready,
            (None, Some(_)) => QuoteView::Unavailable,
            (None, None) => QuoteView::Calculating,
        }
    }
}
