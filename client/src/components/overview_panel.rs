//! Landlord overview: headline numbers, income trend, recent activity.

use leptos::prelude::*;
use rentdesk::types::Overview;

use crate::app::use_services;
use crate::state::dashboard::Loadable;
use crate::util::format::{currency, short_date};

#[component]
pub fn OverviewPanel() -> impl IntoView {
    let services = use_services();
    let overview = RwSignal::new(Loadable::<Overview>::Loading);

    leptos::task::spawn_local(async move {
        let api = services.with_value(|s| s.api.clone());
        overview.set(api.dashboard_overview().await.into());
    });

    view! {
        <section class="panel">
            <h2>"Overview"</h2>
            {move || match overview.get() {
                Loadable::Loading => view! { <p class="page-status">"Loading overview..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <p class="panel__error">{message}</p> }.into_any(),
                Loadable::Ready(data) => view! { <OverviewBody data=data/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn OverviewBody(data: Overview) -> impl IntoView {
    let peak = data.income_data.iter().map(|p| p.income).fold(0.0_f64, f64::max);

    view! {
        <div class="stat-grid">
            <Stat label="Properties" value=data.total_properties.to_string()/>
            <Stat label="Active tenants" value=data.active_tenants.to_string()/>
            <Stat label="Pending requests" value=data.pending_requests.to_string()/>
            <Stat label="Monthly income" value=currency(data.monthly_income)/>
        </div>
        <h3>"Income"</h3>
        <ul class="bar-chart">
            {data
                .income_data
                .into_iter()
                .map(|point| {
                    let width = if peak > 0.0 { point.income / peak * 100.0 } else { 0.0 };
                    view! {
                        <li class="bar-chart__row">
                            <span class="bar-chart__label">{point.month}</span>
                            <span class="bar-chart__bar" style=format!("width: {width:.0}%")></span>
                            <span class="bar-chart__value">{currency(point.income)}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
        <h3>"Occupancy"</h3>
        <ul class="plain-list">
            {data
                .occupancy_data
                .into_iter()
                .map(|point| view! { <li>{format!("{}: {:.0}%", point.month, point.occupancy_rate)}</li> })
                .collect_view()}
        </ul>
        <h3>"Recent activity"</h3>
        <ul class="activity-list">
            {data
                .recent_activity
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="activity-list__item">
                            <strong>{item.title}</strong>
                            <span>{item.description}</span>
                            <time>{short_date(&item.timestamp)}</time>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat__label">{label}</span>
            <span class="stat__value">{value}</span>
        </div>
    }
}
