//! Public landing page listing available properties.

use leptos::prelude::*;
use rentdesk::Route;
use rentdesk::types::{Property, PropertyFilters, PropertyStatus};

use crate::app::use_services;
use crate::components::property_card::PropertyCard;
use crate::state::auth::AuthState;
use crate::state::dashboard::Loadable;

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_services();
    let auth = expect_context::<RwSignal<AuthState>>();
    let listings = RwSignal::new(Loadable::<Vec<Property>>::Loading);

    leptos::task::spawn_local(async move {
        let api = services.with_value(|s| s.api.clone());
        let filters = PropertyFilters { status: Some(PropertyStatus::Available), ..PropertyFilters::default() };
        listings.set(api.list_properties(&filters).await.into());
    });

    let cta = move || match auth.get().role() {
        Some(role) => (Route::dashboard_for(role).path(), "Go to dashboard"),
        None => (Route::Auth.path(), "Sign in or create an account"),
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Find your next home"</h1>
                <p>"Browse available rentals, or manage your own properties and tenants."</p>
                <a class="btn btn--primary" href=move || cta().0>{move || cta().1}</a>
            </section>
            <section class="home-page__listings">
                <h2>"Available now"</h2>
                {move || match listings.get() {
                    Loadable::Loading => view! { <p class="page-status">"Loading listings..."</p> }.into_any(),
                    Loadable::Failed(message) => view! { <p class="panel__error">{message}</p> }.into_any(),
                    Loadable::Ready(list) if list.is_empty() => view! { <p>"Nothing available right now."</p> }.into_any(),
                    Loadable::Ready(list) => {
                        view! {
                            <div class="card-grid">
                                {list.into_iter().map(|property| view! { <PropertyCard property=property/> }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
