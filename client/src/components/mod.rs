//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render and emit; the `*_panel` components also own the fetch for
//! their own section so each one loads and fails independently.

pub mod image_picker;
pub mod nav_bar;
pub mod overview_panel;
pub mod payments_panel;
pub mod profile_panel;
pub mod properties_panel;
pub mod property_card;
pub mod protected;
pub mod requests_panel;
pub mod status_badge;
pub mod toast_host;
