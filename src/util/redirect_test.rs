use super::*;

// =============================================================
// current_location
// =============================================================

#[test]
fn current_location_joins_path_query_and_hash() {
    assert_eq!(current_location("/admin", "tab=2", "top"), "/admin?tab=2#top");
}

#[test]
fn current_location_accepts_prefixed_parts() {
    assert_eq!(current_location("/admin", "?tab=2", "#top"), "/admin?tab=2#top");
}

#[test]
fn current_location_omits_empty_parts() {
    assert_eq!(current_location("/reports", "", ""), "/reports");
    assert_eq!(current_location("", "", ""), "/");
}

// =============================================================
// login_redirect_path
// =============================================================

#[test]
fn login_redirect_path_encodes_original_location() {
    assert_eq!(
        login_redirect_path("/login", "/admin?tab=2"),
        "/login?next=%2Fadmin%3Ftab%3D2"
    );
}

#[test]
fn login_redirect_path_appends_to_existing_query() {
    assert_eq!(login_redirect_path("/login?mode=sso", "/"), "/login?mode=sso&next=%2F");
}

#[test]
fn next_round_trips_through_login_url() {
    let from = "/admin/users?q=a b&sort=name#list";
    let url = login_redirect_path("/login", from);
    let query = url.split_once('?').map(|(_, q)| q).unwrap();
    assert_eq!(next_from_query(query).as_deref(), Some(from));
}

#[test]
fn next_from_query_missing_is_none() {
    assert_eq!(next_from_query("mode=sso"), None);
    assert_eq!(next_from_query(""), None);
}

// =============================================================
// return_path
// =============================================================

#[test]
fn return_path_uses_local_next() {
    assert_eq!(return_path(Some("/admin?tab=2"), "/"), "/admin?tab=2");
}

#[test]
fn return_path_without_next_goes_home() {
    assert_eq!(return_path(None, "/"), "/");
}

#[test]
fn return_path_rejects_external_targets() {
    assert_eq!(return_path(Some("https://evil.example"), "/"), "/");
    assert_eq!(return_path(Some("//evil.example/path"), "/"), "/");
    assert_eq!(return_path(Some("/\\evil.example"), "/"), "/");
    assert_eq!(return_path(Some("admin"), "/home"), "/home");
}
