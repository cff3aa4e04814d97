//! Typed calls against the hotel backend.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all surface as
//! [`ApiError`]. Nothing here panics or logs; callers own the display policy.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::config::backend_url;
use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Transport};
use super::types::{BookingQuote, ConciergeRequest, ConciergeResponse, Dish, QuoteRequest, Room};

/// A list the backend can serve and, when missing, seed with sample data.
pub trait ListResource: DeserializeOwned {
    /// `GET` path returning the full list.
    const LIST_PATH: &'static str;
    /// `POST` path that populates default data.
    const SEED_PATH: &'static str;
    /// Plural noun used in logs.
    const NOUN: &'static str;
}

impl ListResource for Room {
    const LIST_PATH: &'static str = "/rooms";
    const SEED_PATH: &'static str = "/seed/rooms";
    const NOUN: &'static str = "rooms";
}

impl ListResource for Dish {
    const LIST_PATH: &'static str = "/menu";
    const SEED_PATH: &'static str = "/seed/dishes";
    const NOUN: &'static str = "dishes";
}

/// Backend client generic over its transport.
#[derive(Clone, Debug)]
pub struct HotelApi<T> {
    transport: T,
}

/// Client used by mounted panels in the browser.
#[must_use]
pub fn browser_api() -> HotelApi<BrowserTransport> {
    HotelApi::new(BrowserTransport::new(backend_url()))
}

impl<T: Transport> HotelApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Read the full list for `R`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    pub async fn list<R: ListResource>(&self) -> Result<Vec<R>, ApiError> {
        let resp = self.transport.send(ApiRequest::get(R::LIST_PATH)).await?;
        decode(&resp)
    }

    /// Ask the backend to populate sample data for `R`. The reply body is ignored.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx status.
    pub async fn seed<R: ListResource>(&self) -> Result<(), ApiError> {
        let resp = self.transport.send(ApiRequest::post(R::SEED_PATH, None)).await?;
        check_status(&resp)
    }

    /// `POST /concierge`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    pub async fn ask_concierge(&self, request: &ConciergeRequest) -> Result<ConciergeResponse, ApiError> {
        let body = encode(request)?;
        let resp = self.transport.send(ApiRequest::post("/concierge", Some(body))).await?;
        decode(&resp)
    }

    /// `POST /booking/quote`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<BookingQuote, ApiError> {
        let body = encode(request)?;
        let resp = self.transport.send(ApiRequest::post("/booking/quote", Some(body))).await?;
        decode(&resp)
    }
}

fn check_status(resp: &ApiResponse) -> Result<(), ApiError> {
    if resp.is_success() { Ok(()) } else { Err(ApiError::Status(resp.status)) }
}

fn decode<D: DeserializeOwned>(resp: &ApiResponse) -> Result<D, ApiError> {
    check_status(resp)?;
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<S: serde::Serialize>(payload: &S) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
