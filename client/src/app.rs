//! Root application component with service wiring, context providers, and
//! routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core services are built once here and handed down through context:
//! `Services` (gateway + authenticator), the mirrored `AuthState`, and the
//! toast stack. Nothing below the root constructs its own client.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use rentdesk::{ApiClient, ApiError, Authenticator, SessionStore, TokenPolicy};

use crate::components::nav_bar::NavBar;
use crate::components::protected::Protected;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    auth::AuthPage, home::HomePage, landlord_dashboard::LandlordDashboardPage, properties::PropertiesPage,
    property_form::PropertyFormPage, tenant_dashboard::TenantDashboardPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// Backend-facing services shared by every view.
#[derive(Clone, Debug)]
pub struct Services {
    pub api: ApiClient,
    pub auth: Authenticator,
}

impl Services {
    /// Build config, restore the persisted session, and wire the gateway.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Build` if the HTTP client cannot be created.
    pub fn build() -> Result<Self, ApiError> {
        let config = crate::util::config::build_config();
        let session = SessionStore::restore(crate::util::storage::session_storage());
        let api = ApiClient::new(&config, session)?;
        let auth = Authenticator::new(api.clone(), config.token_policy);
        Ok(Self { api, auth })
    }
}

/// Services as a `Copy` handle for event handlers and async tasks.
pub fn use_services() -> StoredValue<Services> {
    StoredValue::new(expect_context::<Services>())
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = match Services::build() {
        Ok(services) => services,
        Err(e) => {
            leptos::logging::error!("startup failed: {e}");
            return view! { <p class="fatal">{format!("Could not start: {e}")}</p> }.into_any();
        }
    };

    let auth = RwSignal::new(AuthState::from_session(services.auth.session().get()));
    let toasts = RwSignal::new(ToastState::default());

    mirror_session(services.auth.session(), auth);
    verify_stored_token(&services.auth, auth);

    provide_context(services);
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Title text="RentDesk"/>
        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route
                        path=(StaticSegment("tenant"), StaticSegment("dashboard"))
                        view=|| view! { <Protected><TenantDashboardPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("landlord"), StaticSegment("dashboard"))
                        view=|| view! { <Protected><LandlordDashboardPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("properties")
                        view=|| view! { <Protected><PropertiesPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("properties"), StaticSegment("new"))
                        view=|| view! { <Protected><PropertyFormPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("properties"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <Protected><PropertyFormPage/></Protected> }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
    .into_any()
}

/// Keep the `AuthState` signal in step with every session change.
fn mirror_session(session: &SessionStore, auth: RwSignal<AuthState>) {
    let mut changes = session.subscribe();
    leptos::task::spawn_local(async move {
        while changes.changed().await.is_ok() {
            let current = changes.borrow_and_update().clone();
            auth.update(|a| a.session = current);
        }
    });
}

/// Under `TokenPolicy::Verify`, hold protected views until the stored token
/// has been checked once.
fn verify_stored_token(authenticator: &Authenticator, auth: RwSignal<AuthState>) {
    if authenticator.policy() != TokenPolicy::Verify || !authenticator.session().is_authenticated() {
        return;
    }
    auth.update(|a| a.verifying = true);
    let authenticator = authenticator.clone();
    leptos::task::spawn_local(async move {
        if let Err(e) = authenticator.verify().await {
            leptos::logging::warn!("token check failed, keeping session: {e}");
        }
        auth.update(|a| a.verifying = false);
    });
}
