//! Spinner shown while the session is still resolving.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(
    /// Cover the whole viewport instead of sitting inline.
    #[prop(optional)]
    full_screen: bool,
) -> impl IntoView {
    let class = if full_screen {
        "loading-spinner loading-spinner--full-screen"
    } else {
        "loading-spinner"
    };
    view! {
        <div class=class role="status" aria-live="polite">
            <div class="loading-spinner__ring"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
