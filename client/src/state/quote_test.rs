use futures::executor::block_on;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::*;
use crate::net::api::HotelApi;
use crate::net::test_transport::ScriptedTransport;
use crate::net::types::{QuoteRequest, format_price};

#[test]
fn default_view_is_calculating() {
    assert_eq!(QuoteState::default().view(), QuoteView::Calculating);
}

#[test]
fn error_before_any_quote_is_unavailable() {
    let mut state = QuoteState::default();
    state.settle(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.view(), QuoteView::Unavailable);
}

#[test]
fn mount_request_is_one_night_for_two_with_addons() {
    let api = HotelApi::new(ScriptedTransport::new().ok(r#"{"nightly_rate":200,"nights":1,"total":200,"addons":[]}"#));
    let request = QuoteRequest::one_night_from(OffsetDateTime::now_utc());
    let mut state = QuoteState::default();
    state.settle(block_on(api.quote(&request)));

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["guests"], 2);
    assert_eq!(body["addons"], serde_json::json!(["wine", "flowers"]));

    let check_in = OffsetDateTime::parse(body["check_in"].as_str().unwrap(), &Rfc3339).unwrap();
    let check_out = OffsetDateTime::parse(body["check_out"].as_str().unwrap(), &Rfc3339).unwrap();
    assert_eq!(check_out - check_in, time::Duration::hours(24));
}

#[test]
fn flat_quote_renders_total_and_no_addons() {
    let api = HotelApi::new(ScriptedTransport::new().ok(r#"{"nightly_rate":200,"nights":1,"total":200,"addons":[]}"#));
    let request = QuoteRequest::one_night_from(OffsetDateTime::now_utc());
    let mut state = QuoteState::default();
    state.settle(block_on(api.quote(&request)));

    assert_eq!(state.view(), QuoteView::Ready);
    let quote = state.quote.unwrap();
    assert_eq!(format_price(quote.total), "$200");
    assert!(quote.addons.is_empty());
}
