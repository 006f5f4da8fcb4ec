//! Authority ledger verification by registry index and transaction hash.

#[cfg(test)]
#[path = "verify_document_test.rs"]
mod verify_document_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::field_error::FieldError;
use crate::components::message_block::{Message, MessageBlock};
use crate::components::sidebar::DashboardLayout;
use crate::net::error::ApiError;
use crate::net::types::VerifyResult;
use crate::util::form::{FieldErrors, require_index};
use crate::util::format::format_unix;

pub(crate) const VERIFY_FAILED: &str = "Verification failed.";
pub(crate) const NOT_FOUND: &str = "Document not found on the blockchain.";

/// `(index, tx_hash)` or the per-field messages.
pub fn validate_verify(tx_hash: &str, index: &str) -> Result<(u64, String), FieldErrors> {
    let mut errors = FieldErrors::default();
    let tx_hash = errors.require("tx_hash", tx_hash, "Transaction hash is required");
    let index = require_index(
        &mut errors,
        "index",
        index,
        "Document index is required",
        "Document index must be a non-negative whole number",
    );
    match (index, tx_hash) {
        (Some(index), Some(tx_hash)) => Ok((index, tx_hash)),
        _ => Err(errors),
    }
}

/// Label/value rows for a ledger hit; `None` when the document does not exist.
pub fn verification_rows(result: &VerifyResult) -> Option<Vec<(&'static str, String)>> {
    if !result.exists {
        return None;
    }
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    Some(vec![
        ("Title", text(&result.title)),
        ("Issuer Address", text(&result.issuer)),
        ("Receiver Address", text(&result.receiver)),
        ("Timestamp", result.timestamp.map(format_unix).unwrap_or_default()),
        ("Flagged", if result.flagged { "Yes" } else { "No" }.to_owned()),
    ])
}

/// The registry answer, or the error message for a failed call.
///
/// # Errors
///
/// Returns an error [`Message`] with the backend's text or [`VERIFY_FAILED`].
pub fn verify_outcome(result: Result<VerifyResult, ApiError>) -> Result<VerifyResult, Message> {
    result.map_err(|e| Message::Error(e.user_message(VERIFY_FAILED)))
}

#[component]
pub fn VerifyDocumentPage() -> impl IntoView {
    let tx_hash = RwSignal::new(String::new());
    let index = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let message = RwSignal::new(None::<Message>);
    let result = RwSignal::new(None::<VerifyResult>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        message.set(None);
        result.set(None);
        let (index_value, tx_value) = match validate_verify(&tx_hash.get(), &index.get()) {
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
            match verify_outcome(crate::net::api::verify_document(index_value, &tx_value).await) {
                Ok(found) => result.set(Some(found)),
                Err(failed) => message.set(Some(failed)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (index_value, tx_value);
    };

    let outcome = move || {
        result.get().map(|r| match verification_rows(&r) {
            Some(rows) => view! {
                <div class="verify-result verify-result--found">
                    <h2>"Document Verified"</h2>
                    <dl>
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect::<Vec<_>>()}
                    </dl>
                </div>
            }
            .into_any(),
            None => view! { <p class="verify-result verify-result--missing">{NOT_FOUND}</p> }.into_any(),
        })
    };

    view! {
        <DashboardLayout title="Verify Document">
            <form class="document-form" on:submit=on_submit>
                <label class="document-form__label">
                    "Transaction Hash"
                    <input
                        type="text"
                        prop:value=move || tx_hash.get()
                        on:input=move |ev| tx_hash.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="tx_hash"/>
                <label class="document-form__label">
                    "Document Index"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || index.get()
                        on:input=move |ev| index.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="index"/>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>
            {outcome}
            <MessageBlock message=message/>
        </DashboardLayout>
    }
}
