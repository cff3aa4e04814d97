use super::*;

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::Status(503).to_string(), "backend responded with status 503");
}

#[test]
fn guest_message_groups_connectivity_failures() {
    assert_eq!(
        ApiError::Transport("offline".to_owned()).guest_message(),
        ApiError::Unavailable.guest_message()
    );
}

#[test]
fn guest_message_distinguishes_server_faults_from_bad_payloads() {
    assert_eq!(ApiError::Status(500).guest_message(), "The hotel service is having trouble.");
    assert_eq!(ApiError::Status(404).guest_message(), "The hotel sent an unexpected reply.");
    assert_eq!(
        ApiError::Decode("eof".to_owned()).guest_message(),
        "The hotel sent an unexpected reply."
    );
}
