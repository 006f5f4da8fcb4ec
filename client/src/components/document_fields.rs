//! Label/value rows for a document's optional fields.
//!
//! DESIGN
//! ======
//! Detail and result views show the same fields; rows exist only for fields
//! the backend actually returned.

#[cfg(test)]
#[path = "document_fields_test.rs"]
mod document_fields_test;

use leptos::prelude::*;

use crate::net::types::Document;
use crate::util::format::format_timestamp;

/// Rows for every present field, in display order.
pub fn detail_rows(doc: &Document) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(owner) = doc.owner_name.as_deref() {
        let value = match doc.owner_public_id.as_deref() {
            Some(public_id) => format!("{owner} ({public_id})"),
            None => owner.to_owned(),
        };
        rows.push(("Uploaded by", value));
    }
    if let Some(issuer) = &doc.issuer_name {
        rows.push(("Issued by", issuer.clone()));
    }
    if let Some(receiver) = doc.receiver_name.as_deref() {
        let value = match doc.receiver_public_id.as_deref() {
            Some(public_id) => format!("{receiver} ({public_id})"),
            None => receiver.to_owned(),
        };
        rows.push(("Issued to", value));
    }
    if let Some(at) = doc.uploaded_at.as_deref() {
        rows.push(("Uploaded at", format_timestamp(at)));
    }
    if let Some(at) = doc.issued_at.as_deref() {
        rows.push(("Issued at", format_timestamp(at)));
    }
    if let Some(hash) = &doc.ipfs_hash {
        rows.push(("IPFS Hash", hash.clone()));
    }
    if let Some(tx) = &doc.tx_hash {
        rows.push(("Transaction Hash", tx.clone()));
    }
    if let Some(index) = doc.document_index {
        rows.push(("Document Index", index.to_string()));
    }
    if doc.is_flagged() {
        rows.push(("Flagged", "Yes".to_owned()));
    }
    rows
}

/// Definition list of [`detail_rows`].
#[component]
pub fn DocumentFields(document: Document) -> impl IntoView {
    view! {
        <dl class="document-fields">
            {detail_rows(&document)
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="document-fields__row">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </dl>
    }
}
