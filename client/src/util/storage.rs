//! Browser `localStorage` behind the core's `SessionStorage` trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists `token` and `user` through whatever storage it
//! is handed. In the browser that is `localStorage`; native builds (tests)
//! get an in-memory map instead.

use std::sync::Arc;

use rentdesk::SessionStorage;

/// `window.localStorage`, looked up on every call so the handle never has to
/// be held across threads.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, rentdesk::StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| rentdesk::StorageError::Write("localStorage unavailable".to_owned()))
    }
}

#[cfg(feature = "csr")]
impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), rentdesk::StorageError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| rentdesk::StorageError::Write(format!("{key}: {e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), rentdesk::StorageError> {
        Self::local()?
            .remove_item(key)
            .map_err(|e| rentdesk::StorageError::Write(format!("{key}: {e:?}")))
    }
}

/// Storage backing the session for this build.
pub fn session_storage() -> Arc<dyn SessionStorage> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(rentdesk::MemoryStorage::new())
    }
}
