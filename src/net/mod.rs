//! Session endpoint access and wire DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity is owned by the backend. The client only asks who is signed in
//! and never stores credentials itself.

pub mod api;
pub mod types;
