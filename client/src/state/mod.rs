//! View-side state shared through context.
//!
//! ARCHITECTURE
//! ============
//! The session itself is owned by `rentdesk::SessionStore`. The signals here
//! mirror it for rendering and hold per-page state that has no backend owner.

pub mod auth;
pub mod dashboard;
pub mod toast;
