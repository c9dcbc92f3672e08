//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the login page to coordinate redirects and
//! identity-dependent rendering. Lives in a `RwSignal<AuthState>` context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the session request has resolved.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Settles the state once the session request finished.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True when a user is present and carries exactly `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.user
            .as_ref()
            .and_then(|u| u.role.as_deref())
            .is_some_and(|r| r == role)
    }
}

/// Returns the provided auth signal, or a settled anonymous state when no
/// `AuthProvider` is mounted.
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().unwrap_or_else(|| RwSignal::new(AuthState::default()))
}
