//! User flagging of a lost or stolen document by registry index.

#[cfg(test)]
#[path = "flag_document_test.rs"]
mod flag_document_test;

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::components::message_block::{Message, MessageBlock};
use crate::components::sidebar::DashboardLayout;
use crate::net::error::ApiError;
use crate::net::types::FlagResponse;
use crate::util::form::{FieldErrors, require_index};

pub(crate) const FLAG_FAILED: &str = "Something went wrong";
pub(crate) const FLAG_UPDATED: &str = "Flag status updated.";

/// Parse the flag select value: `"true"` or `"false"`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// `(index, flag)` or the per-field messages.
pub fn validate_flag(index: &str, flag: &str) -> Result<(u64, bool), FieldErrors> {
    let mut errors = FieldErrors::default();
    let index = require_index(
        &mut errors,
        "index",
        index,
        "Document index is required",
        "Document index must be a non-negative whole number",
    );
    let flag = errors.require_some("flag", parse_flag(flag), "Flag value is required");
    match (index, flag) {
        (Some(index), Some(flag)) => Ok((index, flag)),
        _ => Err(errors),
    }
}

/// Message for a flag call: the backend's confirmation or its error text.
pub fn flag_outcome(result: Result<FlagResponse, ApiError>) -> Message {
    match result {
        Ok(resp) => Message::Success(resp.message.unwrap_or_else(|| FLAG_UPDATED.to_owned())),
        Err(e) => Message::Error(e.user_message(FLAG_FAILED)),
    }
}

#[component]
pub fn FlagDocumentPage() -> impl IntoView {
    let index = RwSignal::new(String::new());
    let flag = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let message = RwSignal::new(None::<Message>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(None);
        let (index_value, flag_value) = match validate_flag(&index.get(), &flag.get()) {
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

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            message.set(Some(flag_outcome(crate::net::api::flag_document(index_value, flag_value).await)));
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (index_value, flag_value);
    };

    view! {
        <DashboardLayout title="Flag a Document">
            <form class="document-form" on:submit=on_submit>
                <label class="document-form__label">
                    "Document Index"
                    <input
                        type="number"
                        min="0"
                        placeholder="Enter document index"
                        prop:value=move || index.get()
                        on:input=move |ev| index.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="index"/>
                <label class="document-form__label">
                    "Flag"
                    <select prop:value=move || flag.get() on:change=move |ev| flag.set(event_target_value(&ev))>
                        <option value="">"Select flag status"</option>
                        <option value="true">"True (Flag)"</option>
                        <option value="false">"False (Unflag)"</option>
                    </select>
                </label>
                <FieldError errors=errors field="flag"/>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
            <MessageBlock message=message/>
        </DashboardLayout>
    }
}
