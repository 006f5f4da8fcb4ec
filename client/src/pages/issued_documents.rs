//! Authority document listing.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::load::{Load, load_on_mount};
use crate::components::document_card::DocumentList;
use crate::components::sidebar::DashboardLayout;
use crate::net::api::fetch_authority_documents;
use crate::state::documents::DocumentSource;

#[component]
pub fn IssuedDocumentsPage() -> impl IntoView {
    let documents = load_on_mount(fetch_authority_documents, "Could not load issued documents.");

    view! {
        <DashboardLayout title="Issued Documents">
            {move || match documents.get() {
                Load::Loading => view! { <p class="loading">"Loading documents..."</p> }.into_any(),
                Load::Failed(message) => view! { <p class="error-message">{message}</p> }.into_any(),
                Load::Ready(docs) => view! {
                    <DocumentList
                        title="Issued Documents"
                        documents=docs
                        source=DocumentSource::Issued
                        empty="You have not issued any documents."
                    />
                }
                .into_any(),
            }}
        </DashboardLayout>
    }
}
