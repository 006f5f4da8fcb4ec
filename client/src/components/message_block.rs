//! Inline success/error banner for form pages.

use leptos::prelude::*;

/// Outcome text of the last submit on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Success(String),
    Error(String),
}

impl Message {
    fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "message message--success",
            Self::Error(_) => "message message--error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

/// Render `message` when set. The signal is page-local, so the block goes
/// away with the page on navigation.
#[component]
pub fn MessageBlock(message: RwSignal<Option<Message>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! { <p class=m.class() role="status">{m.text().to_owned()}</p> }
        })
    }
}
