//! Tenant dashboard: payments and requests side by side.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both lists come from one `tenant_dashboard` call that fetches them
//! concurrently. Each keeps its own outcome, so a failed payments fetch shows
//! an error panel while requests still render.

use leptos::prelude::*;
use rentdesk::types::{Payment, TenantRequest, open_request_count, total_due};

use crate::app::use_services;
use crate::components::payments_panel::PaymentsTable;
use crate::components::status_badge::{StatusBadge, request_tone};
use crate::state::auth::AuthState;
use crate::state::dashboard::Loadable;
use crate::util::format::{currency_exact, short_date};

#[component]
pub fn TenantDashboardPage() -> impl IntoView {
    let services = use_services();
    let auth = expect_context::<RwSignal<AuthState>>();
    let payments = RwSignal::new(Loadable::<Vec<Payment>>::Loading);
    let requests = RwSignal::new(Loadable::<Vec<TenantRequest>>::Loading);

    leptos::task::spawn_local(async move {
        let api = services.with_value(|s| s.api.clone());
        let data = api.tenant_dashboard().await;
        payments.set(data.payments.into());
        requests.set(data.requests.into());
    });

    let due = move || payments.get().ready().map_or_else(|| "-".to_owned(), |list| currency_exact(total_due(list)));
    let open = move || requests.get().ready().map_or_else(|| "-".to_owned(), |list| open_request_count(list).to_string());

    view! {
        <div class="dashboard-page">
            <h1>{move || format!("Welcome, {}", auth.get().display_name())}</h1>
            <div class="stat-grid">
                <div class="stat">
                    <span class="stat__label">"Total due"</span>
                    <span class="stat__value">{due}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Open requests"</span>
                    <span class="stat__value">{open}</span>
                </div>
            </div>
            <section class="panel">
                <h2>"Payments"</h2>
                {move || match payments.get() {
                    Loadable::Loading => view! { <p class="page-status">"Loading payments..."</p> }.into_any(),
                    Loadable::Failed(message) => view! { <p class="panel__error">{message}</p> }.into_any(),
                    Loadable::Ready(list) if list.is_empty() => view! { <p>"No payments yet."</p> }.into_any(),
                    Loadable::Ready(list) => view! { <PaymentsTable list=list/> }.into_any(),
                }}
            </section>
            <section class="panel">
                <h2>"My requests"</h2>
                {move || match requests.get() {
                    Loadable::Loading => view! { <p class="page-status">"Loading requests..."</p> }.into_any(),
                    Loadable::Failed(message) => view! { <p class="panel__error">{message}</p> }.into_any(),
                    Loadable::Ready(list) if list.is_empty() => view! { <p>"No requests submitted."</p> }.into_any(),
                    Loadable::Ready(list) => {
                        list.into_iter()
                            .map(|req| {
                                view! {
                                    <article class="request-row">
                                        <div class="request-row__main">
                                            <strong>{req.title.clone().unwrap_or_else(|| req.kind.clone())}</strong>
                                            <span>{req.property_name.clone()}</span>
                                            <time>{short_date(&req.date)}</time>
                                        </div>
                                        <StatusBadge label=req.status.label() tone=request_tone(req.status)/>
                                    </article>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
