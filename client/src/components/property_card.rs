//! Summary card for one property.

use leptos::prelude::*;
use rentdesk::types::Property;

use crate::components::status_badge::{StatusBadge, property_tone};
use crate::util::format::per_month;

#[component]
pub fn PropertyCard(property: Property, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let cover = property.images.first().cloned();
    let facts = format!("{} bd · {} ba · {} m²", property.bedrooms, property.bathrooms, property.area);

    view! {
        <article class="property-card">
            {cover.map(|src| view! { <img class="property-card__image" src=src alt=property.name.clone()/> })}
            <div class="property-card__body">
                <div class="property-card__header">
                    <h3>{property.name.clone()}</h3>
                    <StatusBadge label=property.status.as_str() tone=property_tone(property.status)/>
                </div>
                <p class="property-card__address">{property.address.clone()}</p>
                <p class="property-card__price">{per_month(property.price)}</p>
                <p class="property-card__facts">{facts}</p>
                {children.map(|c| view! { <div class="property-card__actions">{c()}</div> })}
            </div>
        </article>
    }
}
