//! Authority registration with a proof document upload.
//!
//! On success the visitor is sent to `/login`; accounts are reviewed by the
//! backend before they can sign in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::net::api::RegistrationFields;
use crate::net::error::{ApiError, registration_error_message};
use crate::net::types::RegisterResponse;
use crate::pages::login::GENERIC_FAILURE;
use crate::util::files::selected_file;
use crate::util::form::FieldErrors;

/// Raw text inputs of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub password: String,
    pub name: String,
    pub public_id: String,
    pub sector: String,
}

/// Validated fields plus the proof document, or the per-field messages.
pub fn validate_registration<F>(input: &RegistrationInput, proof: Option<F>) -> Result<(RegistrationFields, F), FieldErrors> {
    let mut errors = FieldErrors::default();
    let username = errors.require("username", &input.username, "Username is required");
    if input.password.is_empty() {
        errors.insert("password", "Password is required");
    }
    let name = errors.require("name", &input.name, "Authority name is required");
    let public_id = errors.require("public_id", &input.public_id, "Public ID is required");
    let sector = errors.require("sector", &input.sector, "Sector is required");
    let proof = errors.require_some("proof_document", proof, "Proof document is required");

    match (username, name, public_id, sector, proof) {
        (Some(username), Some(name), Some(public_id), Some(sector), Some(proof)) if errors.is_empty() => Ok((
            RegistrationFields { username, password: input.password.clone(), name, public_id, sector },
            proof,
        )),
        _ => Err(errors),
    }
}

/// `Ok` when the backend confirmed the new account by echoing its username.
///
/// # Errors
///
/// Returns the text to show for a failed or unconfirmed registration.
pub fn registration_outcome(result: Result<RegisterResponse, ApiError>) -> Result<(), String> {
    match result {
        Ok(resp) if resp.username.is_some() => Ok(()),
        Ok(_) => Err(GENERIC_FAILURE.to_owned()),
        Err(e) => Err(registration_error_message(&e)),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let public_id = RwSignal::new(String::new());
    let sector = RwSignal::new(String::new());
    let proof_input = NodeRef::<Input>::new();
    let errors = RwSignal::new(FieldErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        failure.set(None);
        let input = RegistrationInput {
            username: username.get(),
            password: password.get(),
            name: name.get(),
            public_id: public_id.get(),
            sector: sector.get(),
        };
        let (fields, proof) = match validate_registration(&input, selected_file(proof_input)) {
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
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register_authority(&fields, &proof).await;
                busy.set(false);
                match registration_outcome(result) {
                    Ok(()) => navigate("/login", leptos_router::NavigateOptions::default()),
                    Err(message) => failure.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fields, proof);
        }
    };

    let text_input = move |label: &'static str, field: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError errors=errors field=field/>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Register"</h2>
                <form class="auth-form" on:submit=on_submit>
                    {text_input("Username", "username", "text", username)}
                    {text_input("Password", "password", "password", password)}
                    {text_input("Authority Name", "name", "text", name)}
                    {text_input("Public ID", "public_id", "text", public_id)}
                    {text_input("Sector", "sector", "text", sector)}
                    <label class="auth-form__file">
                        "Proof document"
                        <input type="file" node_ref=proof_input/>
                    </label>
                    <FieldError errors=errors field="proof_document"/>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                {move || failure.get().map(|m| view! { <p class="error-message">{m}</p> })}
                <p>"Already have an account? " <a href="/login">"Login"</a></p>
            </div>
        </div>
    }
}
