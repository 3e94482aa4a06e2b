//! Landlord dashboard with one tab per section.

use leptos::prelude::*;

use crate::components::overview_panel::OverviewPanel;
use crate::components::payments_panel::PaymentsPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::components::properties_panel::PropertiesPanel;
use crate::components::requests_panel::RequestsPanel;
use crate::state::dashboard::LandlordTab;

#[component]
pub fn LandlordDashboardPage() -> impl IntoView {
    let tab = RwSignal::new(LandlordTab::default());

    view! {
        <div class="dashboard-page dashboard-page--landlord">
            <nav class="tab-bar">
                {LandlordTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab-bar__tab"
                                class:tab-bar__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match tab.get() {
                LandlordTab::Overview => view! { <OverviewPanel/> }.into_any(),
                LandlordTab::Properties => view! { <PropertiesPanel/> }.into_any(),
                LandlordTab::Requests => view! { <RequestsPanel/> }.into_any(),
                LandlordTab::Payments => view! { <PaymentsPanel/> }.into_any(),
                LandlordTab::Profile => view! { <ProfilePanel/> }.into_any(),
            }}
        </div>
    }
}
