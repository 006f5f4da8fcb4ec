//! User document upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends `title` and `file` as multipart to the upload endpoint. Image files
//! get a local preview before submit. A `201` response renders the stored
//! document and resets the form; anything else shows an inline error.

#[cfg(test)]
#[path = "upload_document_test.rs"]
mod upload_document_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::document_result::DocumentResult;
use crate::components::field_error::FieldError;
use crate::components::message_block::{Message, MessageBlock};
use crate::components::sidebar::DashboardLayout;
use crate::net::error::ApiError;
use crate::net::types::Document;
use crate::util::files::{image_preview_url, revoke_preview_url, selected_file};
use crate::util::form::FieldErrors;

pub(crate) const UPLOAD_FAILED: &str = "Failed to upload document";
pub(crate) const UPLOADED: &str = "Document uploaded successfully.";

/// Trimmed title and the chosen file, or the per-field messages.
pub fn validate_upload<F>(title: &str, file: Option<F>) -> Result<(String, F), FieldErrors> {
    let mut errors = FieldErrors::default();
    let title = errors.require("title", title, "Title is required");
    let file = errors.require_some("file", file, "File is required");
    match (title, file) {
        (Some(title), Some(file)) => Ok((title, file)),
        _ => Err(errors),
    }
}

/// Swap the preview signal to `next`, releasing the previous object URL.
pub(crate) fn replace_preview(preview: RwSignal<Option<String>>, next: Option<String>) {
    if let Some(old) = preview.get_untracked() {
        revoke_preview_url(&old);
    }
    preview.set(next);
}

/// Stored document plus the message for an upload or issue call.
///
/// Failures carry the backend's error text, or `failed` when it sent none.
pub fn submit_outcome(
    result: Result<Document, ApiError>,
    succeeded: &str,
    failed: &str,
) -> (Option<Document>, Message) {
    match result {
        Ok(document) => (Some(document), Message::Success(succeeded.to_owned())),
        Err(e) => (None, Message::Error(e.user_message(failed))),
    }
}

pub fn upload_outcome(result: Result<Document, ApiError>) -> (Option<Document>, Message) {
    submit_outcome(result, UPLOADED, UPLOAD_FAILED)
}

#[component]
pub fn UploadDocumentPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let file_input = NodeRef::<Input>::new();
    let preview = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::default());
    let message = RwSignal::new(None::<Message>);
    let result = RwSignal::new(None::<Document>);
    let busy = RwSignal::new(false);

    on_cleanup(move || replace_preview(preview, None));

    let on_file_change = move |_| replace_preview(preview, image_preview_url(file_input));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(None);
        let (title_value, file) = match validate_upload(&title.get(), selected_file(file_input)) {
            Ok(values) => {
                errors.set(FieldErrors::default());
                values
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
            let uploaded = crate::net::api::upload_document(&title_value, &file).await;
            let (uploaded, outcome) = upload_outcome(uploaded);
            if let Some(document) = uploaded {
                result.set(Some(document));
                title.set(String::new());
                crate::util::files::reset_input(file_input);
                replace_preview(preview, None);
            }
            message.set(Some(outcome));
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (title_value, file);
    };

    view! {
        <DashboardLayout title="Upload Document">
            <form class="document-form" on:submit=on_submit>
                <label class="document-form__label">
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="title"/>
                <label class="document-form__label">
                    "File"
                    <input type="file" accept=".pdf,.png,.jpg,.jpeg" node_ref=file_input on:change=on_file_change/>
                </label>
                <FieldError errors=errors field="file"/>
                {move || preview.get().map(|url| view! {
                    <div class="document-form__preview">
                        <p>"Image Preview:"</p>
                        <img src=url alt="Preview"/>
                    </div>
                })}
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
            <MessageBlock message=message/>
            {move || result.get().map(|doc| view! { <DocumentResult document=doc heading="Uploaded"/> })}
        </DashboardLayout>
    }
}
