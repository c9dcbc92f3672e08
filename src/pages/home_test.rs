use super::*;

#[test]
fn greeting_uses_display_name() {
    let user = User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None, role: None };
    assert_eq!(greeting(Some(&user)), "Welcome back, Alice.");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(None), "Welcome.");
}

#[test]
fn admin_link_only_for_admin_role() {
    let admin = AuthState {
        user: Some(User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None, role: Some(ADMIN_ROLE.to_owned()) }),
        loading: false,
    };
    let member = AuthState {
        user: Some(User { id: "u2".to_owned(), name: "Bo".to_owned(), email: None, role: Some("member".to_owned()) }),
        loading: false,
    };
    assert_eq!(admin_link(&admin), Some(ADMIN_PATH));
    assert_eq!(admin_link(&member), None);
    assert_eq!(admin_link(&AuthState::default()), None);
}
