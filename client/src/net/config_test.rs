use super::*;

#[test]
fn unset_falls_back_to_local_backend() {
    assert_eq!(resolve_backend_url(None), "http://localhost:8000");
}

#[test]
fn blank_override_is_ignored() {
    assert_eq!(resolve_backend_url(Some("   ")), DEFAULT_BACKEND_URL);
}

#[test]
fn override_drops_trailing_slashes() {
    assert_eq!(resolve_backend_url(Some("https://api.hotel.test//")), "https://api.hotel.test");
}
