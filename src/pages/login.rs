//! Login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard lands anonymous visitors here with `?next=<original location>`.
//! The backend runs the actual sign-in flow; once the session resolves to a
//! user this page sends them back to `next` (or home).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::use_config;
use crate::net::api::SIGN_IN_ENDPOINT;
use crate::state::auth::use_auth;
use crate::state::notifications::use_notifications;
use crate::util::redirect::{login_redirect_path, next_from_query, return_path};

/// Notice shown when the visitor was bounced here from a protected page.
fn redirect_notice(next: Option<&str>) -> Option<&'static str> {
    next.filter(|n| !n.is_empty()).map(|_| "Please sign in to continue.")
}

/// Return target decoded from the login page's query string.
fn return_target(search: &str, home: &str) -> String {
    return_path(next_from_query(search).as_deref(), home)
}

/// Backend sign-in URL that returns to `target` afterwards.
fn sign_in_href(target: &str) -> String {
    login_redirect_path(SIGN_IN_ENDPOINT, target)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let home = use_config().routes.home;
    let search = use_location().search;
    let navigate = use_navigate();

    let next = Memo::new(move |_| search.with(|q| next_from_query(q)));
    let target = Memo::new(move |_| search.with(|q| return_target(q, &home)));

    if let Some(notice) = next.with_untracked(|n| redirect_notice(n.as_deref())) {
        match use_notifications() {
            Ok(notifier) => {
                notifier.info(notice);
            }
            Err(e) => log::warn!("{e}"),
        }
    }

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate(&target.get(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Your session has ended or you have not signed in yet."</p>
                <a class="login-button" href=move || sign_in_href(&target.get()) rel="external">
                    "Continue to sign in"
                </a>
            </div>
        </div>
    }
}
