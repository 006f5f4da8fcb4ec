//! User document listing: own uploads and documents issued to the user.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::load::{Load, load_on_mount};
use crate::components::document_card::DocumentList;
use crate::components::sidebar::DashboardLayout;
use crate::net::api::fetch_user_documents;
use crate::state::documents::DocumentSource;

#[component]
pub fn MyDocumentsPage() -> impl IntoView {
    let documents = load_on_mount(fetch_user_documents, "Could not load your documents.");

    view! {
        <DashboardLayout title="My Documents">
            {move || match documents.get() {
                Load::Loading => view! { <p class="loading">"Loading documents..."</p> }.into_any(),
                Load::Failed(message) => view! { <p class="error-message">{message}</p> }.into_any(),
                Load::Ready(docs) => view! {
                    <DocumentList
                        title="Uploaded Documents"
                        documents=docs.user_uploaded_documents
                        source=DocumentSource::Uploaded
                        empty="You have not uploaded any documents."
                    />
                    <DocumentList
                        title="Issued To Me"
                        documents=docs.authority_issued_documents
                        source=DocumentSource::Issued
                        empty="No documents have been issued to you."
                    />
                }
                .into_any(),
            }}
        </DashboardLayout>
    }
}
