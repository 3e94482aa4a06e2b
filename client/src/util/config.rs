//! Build-time configuration for the browser bundle.
//!
//! There is no process environment in the browser, so the same variables the
//! core reads with `ClientConfig::from_env` are baked in at compile time.

use rentdesk::ClientConfig;
use rentdesk::config::{API_URL_VAR, TOKEN_POLICY_VAR};

/// Config from `RENTDESK_API_URL` / `RENTDESK_TOKEN_POLICY` as seen by the
/// compiler. Invalid values fall back to defaults with a warning.
pub fn build_config() -> ClientConfig {
    let lookup = |key: &str| match key {
        API_URL_VAR => option_env!("RENTDESK_API_URL").map(str::to_owned),
        TOKEN_POLICY_VAR => option_env!("RENTDESK_TOKEN_POLICY").map(str::to_owned),
        _ => None,
    };
    ClientConfig::from_lookup(lookup).unwrap_or_else(|e| {
        leptos::logging::warn!("invalid build config, using defaults: {e}");
        ClientConfig::default()
    })
}
