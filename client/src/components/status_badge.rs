//! Colored status pill for properties, payments, and requests.

use leptos::prelude::*;
use rentdesk::types::{PaymentStatus, PropertyStatus, RequestStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warn,
    Bad,
    Neutral,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Good => "badge badge--good",
            Self::Warn => "badge badge--warn",
            Self::Bad => "badge badge--bad",
            Self::Neutral => "badge",
        }
    }
}

#[must_use]
pub fn property_tone(status: PropertyStatus) -> Tone {
    match status {
        PropertyStatus::Available => Tone::Good,
        PropertyStatus::Occupied => Tone::Neutral,
        PropertyStatus::Maintenance => Tone::Warn,
    }
}

#[must_use]
pub fn payment_tone(status: PaymentStatus) -> Tone {
    match status {
        PaymentStatus::Paid => Tone::Good,
        PaymentStatus::Pending => Tone::Warn,
        PaymentStatus::Overdue | PaymentStatus::Failed => Tone::Bad,
        PaymentStatus::Refunded => Tone::Neutral,
    }
}

#[must_use]
pub fn request_tone(status: RequestStatus) -> Tone {
    match status {
        RequestStatus::Approved | RequestStatus::Resolved => Tone::Good,
        RequestStatus::Rejected => Tone::Bad,
        RequestStatus::Cancelled => Tone::Neutral,
        RequestStatus::Pending | RequestStatus::Open | RequestStatus::InProgress => Tone::Warn,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_requests_are_warnings() {
        for status in [RequestStatus::Pending, RequestStatus::Open, RequestStatus::InProgress] {
            assert!(status.is_open());
            assert_eq!(request_tone(status), Tone::Warn);
        }
    }

    #[test]
    fn money_owed_is_never_good() {
        assert_eq!(payment_tone(PaymentStatus::Overdue), Tone::Bad);
        assert_eq!(payment_tone(PaymentStatus::Pending), Tone::Warn);
        assert_eq!(payment_tone(PaymentStatus::Paid), Tone::Good);
    }

    #[test]
    fn maintenance_property_is_flagged() {
        assert_eq!(property_tone(PropertyStatus::Maintenance), Tone::Warn);
        assert_eq!(property_tone(PropertyStatus::Available), Tone::Good);
    }
}
