//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a page in the router. Anonymous visitors go to the login page with
//! their original location in `next`; signed-in users missing the required
//! role go home. Both redirects replace the history entry.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_spinner::LoadingSpinner;
use crate::config::use_config;
use crate::state::auth::use_auth;
use crate::util::guard::{GuardOutcome, resolve_guard};
use crate::util::redirect::current_location;

/// Reactive guard decision for `here`, reading auth state and route paths
/// from context.
fn guard_outcome(required_role: Option<String>, here: Signal<String>) -> Memo<GuardOutcome> {
    let auth = use_auth();
    let routes = use_config().routes;
    Memo::new(move |_| {
        here.with(|location| {
            auth.with(|state| resolve_guard(state, required_role.as_deref(), location, &routes))
        })
    })
}

#[component]
pub fn ProtectedRoute(
    /// Role the signed-in user must hold, e.g. `"admin"`.
    #[prop(optional, into)]
    required_role: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let here = Signal::derive(move || {
        current_location(
            &location.pathname.get(),
            &location.search.get(),
            &location.hash.get(),
        )
    });
    let outcome = guard_outcome(required_role, here);

    Effect::new(move || {
        let target = outcome.with(|o| o.redirect_target().map(str::to_owned));
        if let Some(to) = target {
            log::debug!("guard redirect -> {to}");
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        GuardOutcome::Loading => view! { <LoadingSpinner full_screen=true/> }.into_any(),
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::RedirectToLogin { .. } | GuardOutcome::RedirectHome { .. } => ().into_any(),
    }
}
