//! Clickable card for document list items.
//!
//! DESIGN
//! ======
//! Opening a card hands the document to the detail view before navigating,
//! since the detail route has nothing to fetch. The document rides along as
//! the new history entry's state and is also kept in the shared
//! `DocumentSelection`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Document;
use crate::state::documents::{DocumentSelection, DocumentSource, SelectedDocument, detail_path};
use crate::util::format::format_timestamp;

/// A card representing one document in a listing.
#[component]
pub fn DocumentCard(document: Document, source: DocumentSource) -> impl IntoView {
    let selection = expect_context::<RwSignal<DocumentSelection>>();
    let navigate = use_navigate();

    let title = document.display_title().to_owned();
    let when = document.timestamp().map(format_timestamp);
    let flagged = document.is_flagged();

    let on_open = move |_| {
        let path = detail_path(&document.id);
        let selected = SelectedDocument { document: document.clone(), source };
        let options = navigate_options(&selected);
        selection.update(|s| s.select(selected.document, selected.source));
        navigate(&path, options);
    };

    view! {
        <button type="button" class="document-card" class:document-card--flagged=flagged on:click=on_open>
            <span class="document-card__title">{title}</span>
            {when.map(|when| view! { <span class="document-card__time">{when}</span> })}
            {flagged.then(|| view! { <span class="document-card__flag">"Flagged"</span> })}
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn navigate_options(selected: &SelectedDocument) -> NavigateOptions {
    let state = selected.to_history_state().map(|raw| wasm_bindgen::JsValue::from_str(&raw));
    NavigateOptions { state: leptos_router::location::State::new(state), ..NavigateOptions::default() }
}

#[cfg(not(feature = "hydrate"))]
fn navigate_options(_selected: &SelectedDocument) -> NavigateOptions {
    NavigateOptions::default()
}

/// A titled section listing documents, with an empty-state line.
#[component]
pub fn DocumentList(
    title: &'static str,
    documents: Vec<Document>,
    source: DocumentSource,
    #[prop(default = "No documents yet.")] empty: &'static str,
) -> impl IntoView {
    let is_empty = documents.is_empty();
    view! {
        <section class="document-list">
            <h3 class="document-list__title">{title}</h3>
            {is_empty.then(|| view! { <p class="document-list__empty">{empty}</p> })}
            <div class="document-list__items">
                {documents
                    .into_iter()
                    .map(|document| view! { <DocumentCard document=document source=source/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
