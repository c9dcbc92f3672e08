use super::*;
use crate::net::types::User;

fn routes() -> RoutePaths {
    RoutePaths::default()
}

fn signed_in(role: Option<&str>) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: Some("alice@example.com".to_owned()),
            role: role.map(str::to_owned),
        }),
        loading: false,
    }
}

fn anonymous() -> AuthState {
    AuthState { user: None, loading: false }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loading_shows_placeholder() {
    let outcome = resolve_guard(&AuthState::pending(), None, "/", &routes());
    assert_eq!(outcome, GuardOutcome::Loading);
    assert_eq!(outcome.redirect_target(), None);
}

#[test]
fn loading_wins_even_with_stale_user() {
    let mut auth = signed_in(Some("admin"));
    auth.loading = true;
    assert_eq!(resolve_guard(&auth, Some("admin"), "/admin", &routes()), GuardOutcome::Loading);
}

// =============================================================
// Anonymous
// =============================================================

#[test]
fn anonymous_redirects_to_login_with_origin() {
    let outcome = resolve_guard(&anonymous(), None, "/reports?year=2024", &routes());
    assert_eq!(
        outcome,
        GuardOutcome::RedirectToLogin { to: "/login?next=%2Freports%3Fyear%3D2024".to_owned() }
    );
}

#[test]
fn anonymous_redirects_to_login_regardless_of_role() {
    for role in [None, Some("admin"), Some("")] {
        let outcome = resolve_guard(&anonymous(), role, "/admin", &routes());
        assert!(matches!(outcome, GuardOutcome::RedirectToLogin { .. }));
        assert_eq!(outcome.redirect_target(), Some("/login?next=%2Fadmin"));
    }
}

#[test]
fn anonymous_uses_configured_login_path() {
    let routes = RoutePaths { login: "/sign-in".to_owned(), home: "/".to_owned() };
    let outcome = resolve_guard(&anonymous(), None, "/", &routes);
    assert_eq!(outcome.redirect_target(), Some("/sign-in?next=%2F"));
}

// =============================================================
// Role checks
// =============================================================

#[test]
fn missing_role_redirects_home() {
    let outcome = resolve_guard(&signed_in(Some("member")), Some("admin"), "/admin", &routes());
    assert_eq!(outcome, GuardOutcome::RedirectHome { to: "/".to_owned() });
}

#[test]
fn user_without_any_role_redirects_home_when_role_required() {
    let outcome = resolve_guard(&signed_in(None), Some("admin"), "/admin", &routes());
    assert_eq!(outcome.redirect_target(), Some("/"));
}

#[test]
fn matching_role_renders() {
    let outcome = resolve_guard(&signed_in(Some("admin")), Some("admin"), "/admin", &routes());
    assert_eq!(outcome, GuardOutcome::Render);
}

#[test]
fn no_role_requirement_renders_for_any_user() {
    assert_eq!(resolve_guard(&signed_in(None), None, "/", &routes()), GuardOutcome::Render);
    assert_eq!(resolve_guard(&signed_in(Some("member")), None, "/", &routes()), GuardOutcome::Render);
}

#[test]
fn empty_role_requirement_is_ignored() {
    assert_eq!(resolve_guard(&signed_in(None), Some(""), "/", &routes()), GuardOutcome::Render);
}
