//! Top navigation with identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use rentdesk::{Role, Route};

use crate::app::use_services;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = use_services();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let route = services.with_value(|s| s.auth.logout());
        navigate(&route.path(), NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"RentDesk"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| view! { <a class="btn nav-bar__login" href=Route::Auth.path()>"Sign in"</a> }
            >
                {move || {
                    auth.get()
                        .role()
                        .map(|role| view! { <a class="nav-bar__link" href=Route::dashboard_for(role).path()>"Dashboard"</a> })
                }}
                <Show when=move || auth.get().role() == Some(Role::Landlord)>
                    <a class="nav-bar__link" href=Route::Properties.path()>"Properties"</a>
                </Show>
                <span class="nav-bar__user">{move || auth.get().display_name()}</span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>"Logout"</button>
            </Show>
        </header>
    }
}
