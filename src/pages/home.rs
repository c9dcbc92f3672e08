//! Authenticated landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::{ADMIN_PATH, ADMIN_ROLE};
use crate::components::auth_provider::sign_out;
use crate::net::types::User;
use crate::state::auth::{AuthState, use_auth};
use crate::state::notifications::use_notifications;

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Welcome.".to_owned(),
    }
}

/// Administration link, shown only to holders of the admin role.
fn admin_link(auth: &AuthState) -> Option<&'static str> {
    auth.has_role(ADMIN_ROLE).then_some(ADMIN_PATH)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifications().ok();

    let on_sign_out = move |_| {
        sign_out(auth);
        if let Some(notifier) = notifier {
            notifier.success("Signed out.");
        }
    };

    let admin_href = move || auth.with(admin_link);

    view! {
        <div class="home-page">
            <h1>{move || auth.with(|s| greeting(s.user.as_ref()))}</h1>
            {move || {
                admin_href()
                    .map(|href| view! { <a class="home-page__link" href=href>"Administration"</a> })
            }}
            <button class="home-page__sign-out" type="button" on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
