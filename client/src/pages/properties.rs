//! Filterable property list.

use leptos::prelude::*;
use rentdesk::types::{PropertyFilters, PropertyStatus};

use crate::components::properties_panel::PropertiesPanel;

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

/// Raw filter inputs; blank or unparseable numbers mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FilterInputs {
    pub status: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
    pub search: String,
}

impl FilterInputs {
    pub(crate) fn to_filters(&self) -> PropertyFilters {
        let number = |raw: &str| raw.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n >= 0.0);
        PropertyFilters {
            status: PropertyStatus::parse(&self.status),
            min_price: number(&self.min_price),
            max_price: number(&self.max_price),
            bedrooms: self.bedrooms.trim().parse().ok(),
            search: Some(self.search.trim().to_owned()).filter(|s| !s.is_empty()),
        }
    }
}

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let inputs = RwSignal::new(FilterInputs::default());
    let applied = RwSignal::new(PropertyFilters::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied.set(inputs.get_untracked().to_filters());
    };
    let on_reset = move |_| {
        inputs.set(FilterInputs::default());
        applied.set(PropertyFilters::default());
    };

    view! {
        <div class="properties-page">
            <form class="filter-bar" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Search name or address"
                    prop:value=move || inputs.get().search
                    on:input=move |ev| inputs.update(|i| i.search = event_target_value(&ev))
                />
                <select on:change=move |ev| inputs.update(|i| i.status = event_target_value(&ev))>
                    <option value="" selected=move || inputs.get().status.is_empty()>"Any status"</option>
                    {PropertyStatus::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.as_str() selected=move || inputs.get().status == s.as_str()>
                                    {s.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="number"
                    min="0"
                    placeholder="Min price"
                    prop:value=move || inputs.get().min_price
                    on:input=move |ev| inputs.update(|i| i.min_price = event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Max price"
                    prop:value=move || inputs.get().max_price
                    on:input=move |ev| inputs.update(|i| i.max_price = event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Bedrooms"
                    prop:value=move || inputs.get().bedrooms
                    on:input=move |ev| inputs.update(|i| i.bedrooms = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Apply"</button>
                <button class="btn" type="button" on:click=on_reset>"Reset"</button>
            </form>
            <PropertiesPanel filters=applied/>
        </div>
    }
}
