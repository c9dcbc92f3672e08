//! # gatehouse
//!
//! Leptos + WASM front-end helpers: a route guard that keeps anonymous or
//! under-privileged users out of protected pages, and a toast notification
//! provider with timed auto-dismissal.
//!
//! The crate also contains the host application (`app::App`) that wires the
//! auth session, notifications, and router together, plus the pages that sit
//! behind the guard.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating gatehouse");
    leptos::mount::hydrate_body(app::App);
}
