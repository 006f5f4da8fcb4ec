//! Single document view fed by the list pages' selection.
//!
//! TRADE-OFFS
//! ==========
//! There is no fetch-by-id endpoint. The router only knows the state of
//! in-app navigations, so reloads and back/forward fall back to
//! `history.state` and then to the in-memory selection. A pasted URL has
//! none of these and renders the not-found line.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::document_result::DocumentResult;
use crate::components::sidebar::DashboardLayout;
use crate::state::documents::{DocumentSelection, DocumentSource, SelectedDocument};

fn go_back() {
    #[cfg(feature = "hydrate")]
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

#[cfg(feature = "hydrate")]
fn history_selection(router_state: &leptos_router::location::State, id: &str) -> Option<SelectedDocument> {
    let from_router = router_state.to_js_value().as_string();
    let from_history = || {
        web_sys::window()
            .and_then(|w| w.history().ok())
            .and_then(|h| h.state().ok())
            .and_then(|v| v.as_string())
    };
    from_router
        .and_then(|raw| SelectedDocument::from_history_state(&raw, id))
        .or_else(|| from_history().and_then(|raw| SelectedDocument::from_history_state(&raw, id)))
}

#[cfg(not(feature = "hydrate"))]
fn history_selection(_router_state: &leptos_router::location::State, _id: &str) -> Option<SelectedDocument> {
    None
}

#[component]
pub fn DocumentDetailPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<DocumentSelection>>();
    let params = use_params_map();
    let location = use_location();

    let selected = move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        location
            .state
            .with(|state| history_selection(state, &id))
            .or_else(|| selection.with(|s| s.lookup(&id).cloned()))
    };

    view! {
        <DashboardLayout title="Document Details">
            <button type="button" class="back-button" on:click=move |_| go_back()>
                "Go Back"
            </button>
            {move || match selected() {
                Some(found) => {
                    let heading = match found.source {
                        DocumentSource::Uploaded => "Uploaded Document",
                        DocumentSource::Issued => "Issued Document",
                    };
                    view! { <DocumentResult document=found.document heading=heading/> }.into_any()
                }
                None => view! { <p class="error-message">"No document data found."</p> }.into_any(),
            }}
        </DashboardLayout>
    }
}
