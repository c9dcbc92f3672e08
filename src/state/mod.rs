//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `notifications`) so components depend on
//! small focused models shared through Leptos context.

pub mod auth;
pub mod notifications;
