use futures::executor::block_on;

use super::*;
use crate::net::test_transport::ScriptedTransport;
use crate::net::transport::Method;
use crate::net::types::SuggestionItem;

const ROOMS: &str = r#"[{"_id":"r1","name":"Aurora Suite","view":"Ocean","capacity":2,"price_per_night":300}]"#;

#[test]
fn list_rooms_hits_rooms_path() {
    let api = HotelApi::new(ScriptedTransport::new().ok(ROOMS));
    let rooms = block_on(api.list::<Room>()).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "Aurora Suite");
    assert_eq!(api.transport().paths(), vec![(Method::Get, "/rooms".to_owned())]);
}

#[test]
fn list_rejects_non_success_status() {
    let api = HotelApi::new(ScriptedTransport::new().reply(404, "[]"));
    assert_eq!(block_on(api.list::<Dish>()), Err(ApiError::Status(404)));
}

#[test]
fn list_reports_decode_failures() {
    let api = HotelApi::new(ScriptedTransport::new().ok("<html>oops</html>"));
    assert!(matches!(block_on(api.list::<Dish>()), Err(ApiError::Decode(_))));
}

#[test]
fn seed_posts_without_body_and_ignores_reply() {
    let api = HotelApi::new(ScriptedTransport::new().ok("not json at all"));
    assert_eq!(block_on(api.seed::<Dish>()), Ok(()));
    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/seed/dishes");
    assert!(requests[0].body.is_none());
}

#[test]
fn ask_concierge_sends_literal_body() {
    let api = HotelApi::new(ScriptedTransport::new().ok(
        r#"{"greeting":"Good evening","suggestions":[{"type":"dining","items":[{"title":"Rooftop tasting"}]}]}"#,
    ));
    let resp = block_on(api.ask_concierge(&ConciergeRequest::default())).unwrap();
    assert_eq!(resp.greeting, "Good evening");
    assert_eq!(
        resp.suggestions[0].items[0],
        SuggestionItem { title: Some("Rooftop tasting".to_owned()), ..SuggestionItem::default() }
    );

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/concierge");
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"mood":"romantic","dietary":["dairy"]}"#));
}

#[test]
fn quote_sends_fields_in_declared_order() {
    let api = HotelApi::new(ScriptedTransport::new().ok(r#"{"nightly_rate":200,"nights":1,"total":200}"#));
    let req = QuoteRequest::one_night_from(time::macros::datetime!(2026-01-01 00:00 UTC));
    block_on(api.quote(&req)).unwrap();

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body.as_deref(),
        Some(
            r#"{"check_in":"2026-01-01T00:00:00Z","check_out":"2026-01-02T00:00:00Z","guests":2,"addons":["wine","flowers"]}"#
        )
    );
}

#[test]
fn quote_propagates_transport_failure() {
    let api = HotelApi::new(ScriptedTransport::new().offline());
    let req = QuoteRequest::one_night_from(time::macros::datetime!(2026-01-01 00:00 UTC));
    assert!(matches!(block_on(api.quote(&req)), Err(ApiError::Transport(_))));
    assert_eq!(api.transport().paths(), vec![(Method::Post, "/booking/quote".to_owned())]);
}

#[test]
fn browser_transport_joins_base_and_path() {
    let transport = BrowserTransport::new("http://localhost:8000");
    assert_eq!(transport.url_for("/menu"), "http://localhost:8000/menu");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_off_browser() {
    let api = browser_api();
    assert_eq!(block_on(api.list::<Room>()), Err(ApiError::Unavailable));
}
