//! File-input glue for the multipart forms.
//!
//! TRADE-OFFS
//! ==========
//! Files only exist in the browser. Outside `hydrate` the selected-file type is
//! `()` and every accessor reports "nothing selected", which keeps the form
//! validators generic and testable natively.

use leptos::html::Input;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
pub type SelectedFile = web_sys::File;

#[cfg(not(feature = "hydrate"))]
pub type SelectedFile = ();

/// First file chosen in `input`, if any.
pub fn selected_file(input: NodeRef<Input>) -> Option<SelectedFile> {
    #[cfg(feature = "hydrate")]
    {
        input.get_untracked()?.files()?.get(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}

/// Object URL for previewing `input`'s file when it is an image.
pub fn image_preview_url(input: NodeRef<Input>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let file = selected_file(input)?;
        if !crate::util::ipfs::is_image_mime(&file.type_()) {
            return None;
        }
        web_sys::Url::create_object_url_with_blob(&file).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}

/// Release an object URL created by [`image_preview_url`].
pub fn revoke_preview_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Clear the chosen file so the form can be reused after a submit.
pub fn reset_input(input: NodeRef<Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input.get_untracked() {
            el.set_value("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}
