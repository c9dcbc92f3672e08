//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render guard and notification surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod auth_provider;
pub mod loading_spinner;
pub mod notification_provider;
pub mod protected_route;
