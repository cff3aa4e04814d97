use futures::executor::block_on;

use super::*;
use crate::net::api::HotelApi;
use crate::net::seed_retry::load_with_seed;
use crate::net::test_transport::ScriptedTransport;
use crate::net::types::Room;

#[test]
fn default_state_is_loading_and_empty() {
    let state = ResourceState::<Room>::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.view(), ListView::Loading);
}

#[test]
fn settle_with_items_shows_cards() {
    let mut state = ResourceState::default();
    state.settle(Ok(vec!["a", "b"]));
    assert!(!state.loading);
    assert_eq!(state.view(), ListView::Items);
    assert!(state.error.is_none());
}

#[test]
fn settle_with_empty_list_shows_empty_state() {
    let mut state = ResourceState::<&str>::default();
    state.settle(Ok(Vec::new()));
    assert_eq!(state.view(), ListView::Empty);
}

#[test]
fn settle_with_error_clears_loading_and_items() {
    let mut state = ResourceState { items: vec![1, 2], loading: true, error: None };
    state.settle(Err(ApiError::Status(500)));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error, Some(ApiError::Status(500)));
    assert_eq!(state.view(), ListView::Empty);
}

#[test]
fn both_reads_failing_settles_to_empty_state() {
    let api = HotelApi::new(ScriptedTransport::new().reply(500, "").reply(500, "").reply(500, ""));
    let mut state = ResourceState::<Room>::default();
    state.settle(block_on(load_with_seed::<Room, _>(&api)));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.view(), ListView::Empty);
    assert_eq!(api.transport().requests().len(), 3);
}
