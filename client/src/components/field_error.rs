use leptos::prelude::*;

use crate::util::form::FieldErrors;

/// Validation message under an input, shown only while `field` has one.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field))
            .map(|msg| view! { <span class="field-error">{msg}</span> })
    }
}
