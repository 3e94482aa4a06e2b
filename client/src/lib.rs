//! # rentdesk-ui
//!
//! Leptos + WASM front end for the rental-property portal.
//!
//! This crate contains pages, components, and view state. Everything that
//! talks to the backend or owns the session lives in the `rentdesk` core
//! crate; views receive those services through context set up in `app`.
//!
//! Browser glue is compiled only with the `csr` feature, so the pure helpers
//! (formatting, toasts, tab state) build and test natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
