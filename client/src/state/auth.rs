//! Auth snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors `SessionStore` into a signal so the guard and user-aware components
//! re-render on login and logout. Written only from the store's subscription.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use rentdesk::{Role, Session};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// A startup token check is still in flight.
    pub verifying: bool,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: Option<Session>) -> Self {
        Self { session, verifying: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    /// Name shown in the nav bar.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.session.as_ref().map(|s| s.display_name.clone()).unwrap_or_default()
    }
}
