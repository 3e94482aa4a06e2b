//! Route wrapper that applies the session guard.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use rentdesk::{GuardDecision, Route, guard};

use crate::state::auth::AuthState;

/// Render `children` only when the guard allows the current path; otherwise
/// redirect where it says.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    move || {
        let state = auth.get();
        if state.verifying {
            return view! { <p class="page-status">"Checking your session..."</p> }.into_any();
        }
        let route = Route::parse(&location.pathname.get()).unwrap_or(Route::Home);
        match guard(&route, state.is_authenticated()) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Redirect(to) => view! { <Redirect path=to.path()/> }.into_any(),
        }
    }
}
