//! Landlord property list with status, edit, and delete actions.

use leptos::prelude::*;
use rentdesk::Route;
use rentdesk::types::{Property, PropertyFilters, PropertyStatus};

use crate::app::use_services;
use crate::components::property_card::PropertyCard;
use crate::components::toast_host::notify;
use crate::state::dashboard::Loadable;
use crate::state::toast::{ToastKind, ToastState};

/// Fetches again whenever `filters` changes.
#[component]
pub fn PropertiesPanel(#[prop(optional, into)] filters: Option<Signal<PropertyFilters>>) -> impl IntoView {
    let services = use_services();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let filters = filters.unwrap_or_else(|| Signal::stored(PropertyFilters::default()));
    let properties = RwSignal::new(Loadable::<Vec<Property>>::Loading);
    let delete_id = RwSignal::new(None::<String>);

    Effect::new(move || {
        let current = filters.get();
        properties.set(Loadable::Loading);
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            properties.set(api.list_properties(&current).await.into());
        });
    });

    let replace = move |updated: Property| {
        properties.update(|p| {
            p.update_ready(|list| {
                if let Some(slot) = list.iter_mut().find(|x| x.id == updated.id) {
                    *slot = updated;
                }
            });
        });
    };

    let set_status = move |id: String, raw: String| {
        let Some(status) = PropertyStatus::parse(&raw) else {
            return;
        };
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            match api.update_property_status(&id, status).await {
                Ok(updated) => {
                    replace(updated);
                    notify(toasts, ToastKind::Success, "Status updated");
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        delete_id.set(None);
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            match api.delete_property(&id).await {
                Ok(()) => {
                    properties.update(|p| p.update_ready(|list| list.retain(|x| x.id != id)));
                    notify(toasts, ToastKind::Success, "Property deleted");
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    };

    view! {
        <section class="panel">
            <div class="panel__header">
                <h2>"Properties"</h2>
                <a class="btn btn--primary" href=Route::NewProperty.path()>"+ Add property"</a>
            </div>
            <Show when=move || delete_id.get().is_some()>
                <div class="confirm-bar">
                    <span>"Delete this property? This cannot be undone."</span>
                    <button class="btn btn--danger" on:click=confirm_delete>"Delete"</button>
                    <button class="btn" on:click=move |_| delete_id.set(None)>"Cancel"</button>
                </div>
            </Show>
            {move || match properties.get() {
                Loadable::Loading => view! { <p class="page-status">"Loading properties..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <p class="panel__error">{message}</p> }.into_any(),
                Loadable::Ready(list) if list.is_empty() => view! { <p>"No properties match."</p> }.into_any(),
                Loadable::Ready(list) => {
                    view! {
                        <div class="card-grid">
                            {list
                                .into_iter()
                                .map(|property| {
                                    let id = property.id.clone();
                                    let status_id = id.clone();
                                    let current = property.status;
                                    view! {
                                        <PropertyCard property=property>
                                            <select on:change=move |ev| set_status(status_id.clone(), event_target_value(&ev))>
                                                {PropertyStatus::ALL
                                                    .into_iter()
                                                    .map(|s| view! { <option value=s.as_str() selected=s == current>{s.as_str()}</option> })
                                                    .collect_view()}
                                            </select>
                                            <a class="btn" href=Route::EditProperty(id.clone()).path()>"Edit"</a>
                                            <button class="btn btn--danger" on:click=move |_| delete_id.set(Some(id.clone()))>
                                                "Delete"
                                            </button>
                                        </PropertyCard>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
