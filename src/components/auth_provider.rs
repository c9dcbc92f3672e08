//! Auth session provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Starts in the loading state, asks `/api/auth/me` once on mount, and
//! settles. The server render never sees the session cookie, so it stays in
//! the loading state and the browser resolves it after hydration.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Provides `RwSignal<AuthState>` to descendants and hydrates it once.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        log::debug!("session resolved (signed in: {})", user.is_some());
        let _ = auth.try_update(|s| s.resolve(user));
    });

    view! { {children()} }
}

/// End the session server-side, then drop the in-memory user.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        let _ = auth.try_update(|s| s.resolve(None));
    });
    #[cfg(not(feature = "hydrate"))]
    auth.update(|s| s.resolve(None));
}
