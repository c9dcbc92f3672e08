//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` feeds the current auth state and location through
//! `resolve_guard` and renders or navigates based on the outcome. This is a
//! UX guard only; the API still authorizes every request on its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::RoutePaths;
use crate::state::auth::AuthState;
use crate::util::redirect::login_redirect_path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session request still in flight.
    Loading,
    /// Anonymous visitor; `to` is the login URL carrying the original location.
    RedirectToLogin { to: String },
    /// Signed in but missing the required role.
    RedirectHome { to: String },
    /// Render the protected children unchanged.
    Render,
}

impl GuardOutcome {
    /// Navigation target, if the outcome is a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::RedirectToLogin { to } | Self::RedirectHome { to } => Some(to),
            Self::Loading | Self::Render => None,
        }
    }
}

/// Decide what a guarded route shows for `auth` at `location`.
///
/// An empty `required_role` counts as no requirement.
pub fn resolve_guard(
    auth: &AuthState,
    required_role: Option<&str>,
    location: &str,
    routes: &RoutePaths,
) -> GuardOutcome {
    if auth.loading {
        return GuardOutcome::Loading;
    }
    if !auth.is_authenticated() {
        return GuardOutcome::RedirectToLogin { to: login_redirect_path(&routes.login, location) };
    }
    match required_role.filter(|r| !r.is_empty()) {
        Some(role) if !auth.has_role(role) => GuardOutcome::RedirectHome { to: routes.home.clone() },
        _ => GuardOutcome::Render,
    }
}
