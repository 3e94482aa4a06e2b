//! Login / signup page.
//!
//! One form toggles between modes. Validation runs before any request; the
//! backend's rejection message is shown verbatim above the form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use rentdesk::Role;
use rentdesk::validate::{AuthMode, CredentialsForm, FieldErrors, validate_credentials};

use crate::app::use_services;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

pub(crate) fn heading(mode: AuthMode) -> (&'static str, &'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Sign in to your account", "Sign in", "Need an account? Sign up"),
        AuthMode::Signup => ("Create your account", "Sign up", "Already have an account? Sign in"),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::Login);
    let form = RwSignal::new(CredentialsForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| move || errors.get().get(field).map(str::to_owned);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current_mode = mode.get_untracked();
        let values = form.get_untracked();
        if let Err(e) = validate_credentials(current_mode, &values) {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        message.set(None);
        busy.set(true);

        let authenticator = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let email = values.email.trim();
            let result = match current_mode {
                AuthMode::Login => authenticator.login(email, &values.password).await,
                AuthMode::Signup => authenticator.signup(email, &values.password, values.role.as_str()).await,
            };
            busy.set(false);
            match result {
                Ok(route) => navigate(&route.path(), NavigateOptions::default()),
                Err(e) => message.set(Some(e.to_string())),
            }
        });
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggle());
        errors.set(FieldErrors::default());
        message.set(None);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || heading(mode.get()).0}</h1>
                <Show when=move || message.get().is_some()>
                    <p class="auth-card__error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Email"
                        <input
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <span class="field-error">{field_error("email")}</span>
                    </label>
                    <label class="form__field">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <span class="field-error">{field_error("password")}</span>
                    </label>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <label class="form__field">
                            "Confirm password"
                            <input
                                type="password"
                                prop:value=move || form.get().confirm_password
                                on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                            />
                            <span class="field-error">{field_error("confirmPassword")}</span>
                        </label>
                        <fieldset class="form__roles">
                            <legend>"I am a"</legend>
                            {[Role::Tenant, Role::Landlord]
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <label>
                                            <input
                                                type="radio"
                                                name="role"
                                                value=role.as_str()
                                                prop:checked=move || form.get().role == role
                                                on:change=move |_| form.update(|f| f.role = role)
                                            />
                                            {role.as_str()}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </fieldset>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { heading(mode.get()).1 }}
                    </button>
                </form>
                <button class="btn btn--link" on:click=on_toggle>{move || heading(mode.get()).2}</button>
            </div>
        </div>
    }
}
