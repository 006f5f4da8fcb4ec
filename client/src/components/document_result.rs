//! Card for a document just returned by the backend (upload, issue, detail).
//!
//! DESIGN
//! ======
//! The stored file is shown through the public gateway. Inline rendering is
//! limited to content addresses with an image extension; everything else
//! gets a link only.

use leptos::prelude::*;

use super::document_fields::DocumentFields;
use crate::net::types::Document;
use crate::util::ipfs::{document_url, is_image_address};

#[component]
pub fn DocumentResult(document: Document, #[prop(default = "Document")] heading: &'static str) -> impl IntoView {
    let title = document.display_title().to_owned();
    let link = document.ipfs_hash.as_deref().map(|cid| (document_url(cid), is_image_address(cid)));

    view! {
        <article class="document-result">
            <p class="document-result__heading">{heading}</p>
            <h2 class="document-result__title">{title.clone()}</h2>
            <DocumentFields document=document/>
            {link.map(|(url, image)| {
                view! {
                    {image.then(|| view! { <img class="document-result__preview" src=url.clone() alt=title.clone()/> })}
                    <a class="document-result__link" href=url target="_blank" rel="noopener noreferrer">
                        "Open on IPFS"
                    </a>
                }
            })}
        </article>
    }
}
