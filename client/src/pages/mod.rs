//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod auth;
pub mod home;
pub mod landlord_dashboard;
pub mod properties;
pub mod property_form;
pub mod tenant_dashboard;
