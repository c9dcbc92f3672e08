use super::*;

#[test]
fn admin_path_matches_route_segment() {
    assert_eq!(ADMIN_PATH, format!("/{ADMIN_SEGMENT}"));
}

#[test]
fn admin_role_is_lowercase_admin() {
    assert_eq!(ADMIN_ROLE, "admin");
}
