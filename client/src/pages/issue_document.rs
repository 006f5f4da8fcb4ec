//! Authority document issuance to a receiver's public id.

#[cfg(test)]
#[path = "issue_document_test.rs"]
mod issue_document_test;

use leptos::html::Input;
use leptos::prelude::*;

use super::upload_document::{replace_preview, submit_outcome};
use crate::components::document_result::DocumentResult;
use crate::components::field_error::FieldError;
use crate::components::message_block::{Message, MessageBlock};
use crate::components::sidebar::DashboardLayout;
use crate::net::error::ApiError;
use crate::net::types::Document;
use crate::util::files::{image_preview_url, selected_file};
use crate::util::form::FieldErrors;

pub(crate) const ISSUE_FAILED: &str = "Failed to issue document";
pub(crate) const ISSUED: &str = "Document issued successfully.";

/// Validated issuance fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssueRequest<F> {
    pub receiver_id: String,
    pub title: String,
    pub file: F,
}

pub fn validate_issue<F>(receiver_id: &str, title: &str, file: Option<F>) -> Result<IssueRequest<F>, FieldErrors> {
    let mut errors = FieldErrors::default();
    let receiver_id = errors.require("receiver_id", receiver_id, "Receiver ID is required");
    let title = errors.require("title", title, "Title is required");
    let file = errors.require_some("file", file, "File is required");
    match (receiver_id, title, file) {
        (Some(receiver_id), Some(title), Some(file)) => Ok(IssueRequest { receiver_id, title, file }),
        _ => Err(errors),
    }
}

pub fn issue_outcome(result: Result<Document, ApiError>) -> (Option<Document>, Message) {
    submit_outcome(result, ISSUED, ISSUE_FAILED)
}

#[component]
pub fn IssueDocumentPage() -> impl IntoView {
    let receiver_id = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let file_input = NodeRef::<Input>::new();
    let preview = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::default());
    let message = RwSignal::new(None::<Message>);
    let result = RwSignal::new(None::<Document>);
    let busy = RwSignal::new(false);

    on_cleanup(move || replace_preview(preview, None));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(None);
        let request = match validate_issue(&receiver_id.get(), &title.get(), selected_file(file_input)) {
            Ok(request) => {
                errors.set(FieldErrors::default());
                request
            }
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);
        result.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let issued = crate::net::api::issue_document(&request.receiver_id, &request.title, &request.file).await;
            let (issued, outcome) = issue_outcome(issued);
            if let Some(document) = issued {
                result.set(Some(document));
                receiver_id.set(String::new());
                title.set(String::new());
                crate::util::files::reset_input(file_input);
                replace_preview(preview, None);
            }
            message.set(Some(outcome));
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <DashboardLayout title="Issue Document">
            <form class="document-form" on:submit=on_submit>
                <label class="document-form__label">
                    "Receiver Public ID"
                    <input
                        type="text"
                        placeholder="e.g. public123xyz"
                        prop:value=move || receiver_id.get()
                        on:input=move |ev| receiver_id.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="receiver_id"/>
                <label class="document-form__label">
                    "Document Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="title"/>
                <label class="document-form__label">
                    "Document File"
                    <input
                        type="file"
                        accept=".pdf,.png,.jpg,.jpeg"
                        node_ref=file_input
                        on:change=move |_| replace_preview(preview, image_preview_url(file_input))
                    />
                </label>
                <FieldError errors=errors field="file"/>
                {move || preview.get().map(|url| view! {
                    <div class="document-form__preview">
                        <p>"Preview:"</p>
                        <img src=url alt="Preview"/>
                    </div>
                })}
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Issuing..." } else { "Issue Document" }}
                </button>
            </form>
            <MessageBlock message=message/>
            {move || result.get().map(|doc| view! { <DocumentResult document=doc heading="Issued"/> })}
        </DashboardLayout>
    }
}
