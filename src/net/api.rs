//! REST helpers for the session endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the session cookie is only
//! visible to the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures degrade to "anonymous" and are logged; the route guard then
//! treats the visitor like any other signed-out user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

pub const SESSION_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
/// Backend entry point that starts the sign-in flow and returns to `next`.
pub const SIGN_IN_ENDPOINT: &str = "/auth/sign-in";

#[cfg(any(test, feature = "hydrate"))]
fn session_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(SESSION_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session request error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            // 401 is the normal anonymous answer; anything else is worth a note.
            if resp.status() != 401 {
                log::warn!("{}", session_failed_message(resp.status()));
            }
            return None;
        }
        match resp.json::<User>().await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("session payload invalid: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request error: {e}");
        }
    }
}
