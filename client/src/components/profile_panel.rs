//! Profile view and edit form.

use leptos::prelude::*;
use rentdesk::types::{Profile, ProfileUpdate};
use rentdesk::validate::looks_like_email;

use crate::app::use_services;
use crate::components::toast_host::notify;
use crate::state::toast::{ToastKind, ToastState};

/// Only fields that differ from `current` are sent.
fn changes(current: &Profile, name: &str, email: &str) -> ProfileUpdate {
    let name = name.trim();
    let email = email.trim();
    ProfileUpdate {
        name: (name != current.name).then(|| name.to_owned()),
        email: (email != current.email).then(|| email.to_owned()),
    }
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let services = use_services();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let current = RwSignal::new(None::<Profile>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    leptos::task::spawn_local(async move {
        let api = services.with_value(|s| s.api.clone());
        match api.profile().await {
            Ok(profile) => {
                name.set(profile.name.clone());
                email.set(profile.email.clone());
                current.set(Some(profile));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(before) = current.get_untracked() else {
            return;
        };
        if !looks_like_email(&email.get_untracked()) {
            error.set(Some("Email is invalid".to_owned()));
            return;
        }
        let update = changes(&before, &name.get_untracked(), &email.get_untracked());
        if update == ProfileUpdate::default() {
            notify(toasts, ToastKind::Success, "Nothing to save");
            return;
        }
        error.set(None);
        saving.set(true);
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            match api.update_profile(&update).await {
                Ok(profile) => {
                    current.set(Some(profile));
                    notify(toasts, ToastKind::Success, "Profile updated");
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="panel">
            <h2>"Profile"</h2>
            <Show when=move || error.get().is_some()>
                <p class="panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Name"
                    <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                </label>
                <label class="form__field">
                    "Email"
                    <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev))/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get() || current.get().is_none()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_sends_only_edited_fields() {
        let current = Profile { name: "Lee".into(), email: "lee@example.com".into() };
        assert_eq!(changes(&current, " Lee ", "lee@example.com"), ProfileUpdate::default());
        assert_eq!(
            changes(&current, "Lee Park", "lee@example.com"),
            ProfileUpdate { name: Some("Lee Park".into()), email: None }
        );
    }
}
