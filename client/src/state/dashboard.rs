//! Dashboard tab selection and per-panel load state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use rentdesk::ApiError;

/// Sections of the landlord dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LandlordTab {
    #[default]
    Overview,
    Properties,
    Requests,
    Payments,
    Profile,
}

impl LandlordTab {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Properties, Self::Requests, Self::Payments, Self::Profile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Properties => "Properties",
            Self::Requests => "Requests",
            Self::Payments => "Payments",
            Self::Profile => "Profile",
        }
    }
}

/// One panel's fetch outcome. Each panel owns its own so one failure never
/// blanks another.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(value) = self {
            f(value);
        }
    }
}

impl<T> From<Result<T, ApiError>> for Loadable<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
