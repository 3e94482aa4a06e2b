//! Landlord payments ledger.

use leptos::prelude::*;
use rentdesk::types::{Payment, PaymentStatus, total_due};

use crate::app::use_services;
use crate::components::status_badge::{StatusBadge, payment_tone};
use crate::state::dashboard::Loadable;
use crate::util::format::{currency, short_date};

fn total_collected(payments: &[Payment]) -> f64 {
    payments.iter().filter(|p| p.status == PaymentStatus::Paid).map(|p| p.amount).sum()
}

#[component]
pub fn PaymentsPanel() -> impl IntoView {
    let services = use_services();
    let payments = RwSignal::new(Loadable::<Vec<Payment>>::Loading);

    leptos::task::spawn_local(async move {
        let api = services.with_value(|s| s.api.clone());
        payments.set(api.payments().await.into());
    });

    view! {
        <section class="panel">
            <h2>"Payments"</h2>
            {move || match payments.get() {
                Loadable::Loading => view! { <p class="page-status">"Loading payments..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <p class="panel__error">{message}</p> }.into_any(),
                Loadable::Ready(list) if list.is_empty() => view! { <p>"No payments yet."</p> }.into_any(),
                Loadable::Ready(list) => view! { <PaymentsTable list=list/> }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn PaymentsTable(list: Vec<Payment>) -> impl IntoView {
    let collected = currency(total_collected(&list));
    let due = currency(total_due(&list));

    view! {
        <p class="panel__summary">{format!("Collected {collected} · Outstanding {due}")}</p>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Tenant"</th>
                    <th>"Property"</th>
                    <th>"Amount"</th>
                    <th>"Date"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|p| {
                        view! {
                            <tr>
                                <td>{p.tenant_name}</td>
                                <td>{p.property_name}</td>
                                <td>{currency(p.amount)}</td>
                                <td>{short_date(&p.date)}</td>
                                <td><StatusBadge label=p.status.label() tone=payment_tone(p.status)/></td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(amount: f64, status: PaymentStatus) -> Payment {
        Payment {
            id: "p".into(),
            tenant_name: String::new(),
            property_name: String::new(),
            amount,
            date: String::new(),
            status,
            description: None,
            method: None,
            receipt_url: None,
        }
    }

    #[test]
    fn collected_counts_only_paid() {
        let list = [payment(100.0, PaymentStatus::Paid), payment(50.0, PaymentStatus::Pending)];
        assert_eq!(total_collected(&list), 100.0);
        assert_eq!(total_due(&list), 50.0);
    }
}
