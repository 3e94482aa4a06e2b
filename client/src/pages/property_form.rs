//! Create / edit property form with image upload.
//!
//! DESIGN
//! ======
//! New properties upload their images first and are created with the returned
//! URLs, so a failed upload creates nothing. Edits upload to the existing
//! property, then send the full form as a patch with the new URLs appended
//! after the kept ones.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use rentdesk::types::{ImageFile, PropertyDraft, PropertyPatch, PropertyStatus};
use rentdesk::validate::{FieldErrors, PropertyForm, validate_property};
use rentdesk::{ApiClient, ApiError, Route};

use crate::app::use_services;
use crate::components::image_picker::ImagePicker;
use crate::components::toast_host::notify;
use crate::state::toast::{ToastKind, ToastState};

#[cfg(test)]
#[path = "property_form_test.rs"]
mod property_form_test;

/// Blank form for a new listing; numeric fields start empty, not `0`.
pub(crate) fn blank_form() -> PropertyForm {
    PropertyForm {
        price: String::new(),
        bedrooms: String::new(),
        bathrooms: String::new(),
        area: String::new(),
        ..PropertyForm::default()
    }
}

async fn save(api: ApiClient, id: Option<String>, draft: PropertyDraft, files: Vec<ImageFile>) -> Result<(), ApiError> {
    match id {
        None => {
            api.create_property_with_images(draft, &files).await?;
        }
        Some(id) => {
            let mut draft = draft;
            let urls = api.upload_property_images(&id, &files).await?;
            draft.images.extend(urls);
            api.update_property(&id, &PropertyPatch::from(draft)).await?;
        }
    }
    Ok(())
}

#[component]
pub fn PropertyFormPage() -> impl IntoView {
    let services = use_services();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let property_id = params.read_untracked().get("id");
    let editing = property_id.is_some();

    let form = RwSignal::new(blank_form());
    let files = RwSignal::new(Vec::<ImageFile>::new());
    let errors = RwSignal::new(FieldErrors::default());
    let message = RwSignal::new(None::<String>);
    let loading = RwSignal::new(editing);
    let saving = RwSignal::new(false);

    if let Some(id) = property_id.clone() {
        leptos::task::spawn_local(async move {
            let api = services.with_value(|s| s.api.clone());
            match api.get_property(&id).await {
                Ok(property) => form.set(PropertyForm::from(&PropertyDraft::from(&property))),
                Err(e) => message.set(Some(format!("Failed to load property: {e}"))),
            }
            loading.set(false);
        });
    }

    let field_error = move |field: &'static str| move || errors.get().get(field).map(str::to_owned);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || loading.get_untracked() {
            return;
        }
        let draft = match validate_property(&form.get_untracked()) {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        message.set(None);
        saving.set(true);

        let api = services.with_value(|s| s.api.clone());
        let id = property_id.clone();
        let picked = files.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match save(api, id, draft, picked).await {
                Ok(()) => {
                    notify(toasts, ToastKind::Success, "Property saved");
                    navigate(&Route::Properties.path(), NavigateOptions::default());
                }
                Err(e) => message.set(Some(format!("Failed to save property: {e}"))),
            }
            saving.set(false);
        });
    };

    let text_input = move |label: &'static str, field: &'static str, kind: &'static str| {
        let read = move || field_value(&form.get(), field);
        view! {
            <label class="form__field">
                {label}
                <input
                    type=kind
                    step="any"
                    prop:value=read
                    on:input=move |ev| form.update(|f| set_field_value(f, field, event_target_value(&ev)))
                />
                <span class="field-error">{field_error(field)}</span>
            </label>
        }
    };

    view! {
        <div class="property-form-page">
            <h1>{if editing { "Edit property" } else { "Add property" }}</h1>
            <Show when=move || message.get().is_some()>
                <p class="panel__error">{move || message.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading property..."</p> }>
                <form class="form form--grid" on:submit=on_submit.clone()>
                    {text_input("Name", "name", "text")}
                    {text_input("Address", "address", "text")}
                    <label class="form__field form__field--wide">
                        "Description"
                        <textarea
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                        <span class="field-error">{field_error("description")}</span>
                    </label>
                    {text_input("Monthly rent", "price", "number")}
                    {text_input("Area (m²)", "area", "number")}
                    {text_input("Bedrooms", "bedrooms", "number")}
                    {text_input("Bathrooms", "bathrooms", "number")}
                    <label class="form__field">
                        "Status"
                        <select on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))>
                            {PropertyStatus::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option value=s.as_str() selected=move || form.get().status == s.as_str()>
                                            {s.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <span class="field-error">{field_error("status")}</span>
                    </label>
                    {text_input("Amenities (comma separated)", "amenities", "text")}
                    {text_input("Latitude", "latitude", "number")}
                    {text_input("Longitude", "longitude", "number")}
                    <div class="form__field form__field--wide">
                        "Photos"
                        <ul class="thumb-list">
                            {move || {
                                form.get()
                                    .images
                                    .into_iter()
                                    .map(|url| {
                                        let target = url.clone();
                                        view! {
                                            <li class="thumb-list__item">
                                                <img src=url alt="property photo"/>
                                                <button
                                                    class="btn btn--link"
                                                    type="button"
                                                    on:click=move |_| form.update(|f| f.images.retain(|u| *u != target))
                                                >
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                        <ImagePicker files=files/>
                    </div>
                    <div class="form__actions">
                        <a class="btn" href=Route::Properties.path()>"Cancel"</a>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save property" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

pub(crate) fn field_value(form: &PropertyForm, field: &str) -> String {
    match field {
        "name" => form.name.clone(),
        "address" => form.address.clone(),
        "price" => form.price.clone(),
        "area" => form.area.clone(),
        "bedrooms" => form.bedrooms.clone(),
        "bathrooms" => form.bathrooms.clone(),
        "amenities" => form.amenities.clone(),
        "latitude" => form.latitude.clone(),
        "longitude" => form.longitude.clone(),
        _ => String::new(),
    }
}

pub(crate) fn set_field_value(form: &mut PropertyForm, field: &str, value: String) {
    match field {
        "name" => form.name = value,
        "address" => form.address = value,
        "price" => form.price = value,
        "area" => form.area = value,
        "bedrooms" => form.bedrooms = value,
        "bathrooms" => form.bathrooms = value,
        "amenities" => form.amenities = value,
        "latitude" => form.latitude = value,
        "longitude" => form.longitude = value,
        _ => {}
    }
}
