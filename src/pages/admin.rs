//! Admin-only page; mounted behind `ProtectedRoute` requiring `ADMIN_ROLE`.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::state::notifications::{Severity, use_notifications};

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifications().ok();

    let role = move || {
        auth.with(|s| s.user.as_ref().and_then(|u| u.role.clone()).unwrap_or_default())
    };

    let on_pin = move |_| {
        if let Some(notifier) = notifier {
            // Zero duration: stays until the user dismisses it.
            notifier.add("Maintenance window starts at 22:00 UTC.", Severity::Warning, std::time::Duration::ZERO);
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
            <p>"Signed in with role: " <strong>{role}</strong></p>
            <button type="button" on:click=on_pin>"Pin maintenance notice"</button>
        </div>
    }
}
