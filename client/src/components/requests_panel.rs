//! Tenant requests with landlord approve/reject actions.

use leptos::prelude::*;
use rentdesk::types::{RequestStatus, TenantRequest};

use crate::app::use_services;
use crate::components::status_badge::{StatusBadge, request_tone};
use crate::components::toast_host::notify;
use crate::state::dashboard::Loadable;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::short_date;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn outcome(self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

#[component]
pub fn RequestsPanel() -> impl IntoView {
    let services = use_services();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let requests = RwSignal::new(Loadable::<Vec<TenantRequest>>::Loading);
    // Id of the request whose decision is in flight.
    let busy = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        let api = services.with_value(|s| s.api.clone());
        requests.set(api.tenant_requests().await.into());
    });

    let decide = move |id: String, decision: Decision| {
        if busy.get_untracked().is_some() {
            return;
        }
        busy.set(Some(id.clone()));
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            let result = match decision {
                Decision::Approve => api.approve_request(&id).await,
                Decision::Reject => api.reject_request(&id).await,
            };
            match result {
                Ok(()) => {
                    requests.update(|r| {
                        r.update_ready(|list| {
                            if let Some(req) = list.iter_mut().find(|req| req.id == id) {
                                req.status = decision.outcome();
                            }
                        });
                    });
                    notify(toasts, ToastKind::Success, format!("Request {}", decision.outcome().label().to_lowercase()));
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
            busy.set(None);
        });
    };

    view! {
        <section class="panel">
            <h2>"Requests"</h2>
            {move || match requests.get() {
                Loadable::Loading => view! { <p class="page-status">"Loading requests..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <p class="panel__error">{message}</p> }.into_any(),
                Loadable::Ready(list) if list.is_empty() => view! { <p>"No requests."</p> }.into_any(),
                Loadable::Ready(list) => {
                    list.into_iter()
                        .map(|req| {
                            let approve_id = req.id.clone();
                            let reject_id = req.id.clone();
                            view! {
                                <article class="request-row">
                                    <div class="request-row__main">
                                        <strong>{req.title.clone().unwrap_or_else(|| req.kind.clone())}</strong>
                                        <span>{format!("{} · {}", req.tenant_name, req.property_name)}</span>
                                        <time>{short_date(&req.date)}</time>
                                    </div>
                                    <StatusBadge label=req.status.label() tone=request_tone(req.status)/>
                                    <Show when=move || req.status.is_open()>
                                        <div class="request-row__actions">
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || busy.get().is_some()
                                                on:click={
                                                    let id = approve_id.clone();
                                                    move |_| decide(id.clone(), Decision::Approve)
                                                }
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                disabled=move || busy.get().is_some()
                                                on:click={
                                                    let id = reject_id.clone();
                                                    move |_| decide(id.clone(), Decision::Reject)
                                                }
                                            >
                                                "Reject"
                                            </button>
                                        </div>
                                    </Show>
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}
