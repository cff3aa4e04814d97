use super::*;

#[test]
fn overlay_starts_closed() {
    assert!(!OverlayState::default().is_open());
}

#[test]
fn open_then_close_round_trips() {
    let mut state = OverlayState::default();
    state.open(ModelDescriptor::default());
    assert!(state.is_open());
    state.close();
    assert!(!state.is_open());
}
