use super::*;

#[test]
fn session_failed_message_formats_status() {
    assert_eq!(session_failed_message(500), "session request failed: 500");
}

#[test]
fn endpoints_live_under_api_auth() {
    assert_eq!(SESSION_ENDPOINT, "/api/auth/me");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}
