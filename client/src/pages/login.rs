//! Login page: public id + password against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores the access token through `AuthState::login` and
//! routes to the dashboard of the reported role. A response without both
//! tokens counts as a rejection.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::net::error::ApiError;
use crate::net::types::LoginResponse;
use crate::util::form::FieldErrors;
use crate::util::token::Role;

pub(crate) const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
pub(crate) const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Trimmed `(public_id, password)` or the per-field messages.
pub fn validate_login(public_id: &str, password: &str) -> Result<(String, String), FieldErrors> {
    let mut errors = FieldErrors::default();
    let public_id = errors.require("public_id", public_id, "Public ID is required");
    // Passwords are sent as typed; only emptiness is checked.
    let password = if password.is_empty() {
        errors.insert("password", "Password is required");
        None
    } else {
        Some(password.to_owned())
    };
    match (public_id, password) {
        (Some(id), Some(pw)) if errors.is_empty() => Ok((id, pw)),
        _ => Err(errors),
    }
}

/// Access token and reported role from a login response.
///
/// # Errors
///
/// Returns the invalid-credentials message when either token is missing.
pub fn resolve_login(response: &LoginResponse) -> Result<(String, Option<Role>), &'static str> {
    match (&response.access, &response.refresh) {
        (Some(access), Some(_)) if !access.is_empty() => {
            Ok((access.clone(), response.user.as_ref().and_then(|u| u.role)))
        }
        _ => Err(INVALID_CREDENTIALS),
    }
}

/// Token and role from the login call, or the text to show.
///
/// # Errors
///
/// Returns the backend's error text or [`GENERIC_FAILURE`] when the call
/// fails, and [`INVALID_CREDENTIALS`] when the response lacks tokens.
pub fn login_outcome(result: Result<LoginResponse, ApiError>) -> Result<(String, Option<Role>), String> {
    match result {
        Ok(response) => resolve_login(&response).map_err(str::to_owned),
        Err(e) => Err(e.user_message(GENERIC_FAILURE)),
    }
}

/// Dashboard after login: the response's role wins over the token's.
pub fn post_login_path(reported: Option<Role>, from_claims: Role) -> &'static str {
    reported.unwrap_or(from_claims).home_path()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let public_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        failure.set(None);
        let (id, pw) = match validate_login(&public_id.get(), &password.get()) {
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
                let outcome = login_outcome(crate::net::api::login(&id, &pw).await);
                let redirect = outcome.and_then(|(token, reported)| {
                    let now = crate::util::clock::now_unix_secs();
                    auth.try_update(|s| s.login(&crate::util::storage::LocalTokenStore, &token, now))
                        .unwrap_or(Err(crate::state::auth::SessionError::Expired))
                        .map(|role| post_login_path(reported, role))
                        .map_err(|e| {
                            log::warn!("login token rejected: {e}");
                            INVALID_CREDENTIALS.to_owned()
                        })
                });
                busy.set(false);
                match redirect {
                    Ok(path) => navigate(path, leptos_router::NavigateOptions::default()),
                    Err(message) => failure.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, pw);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Public ID"
                        prop:value=move || public_id.get()
                        on:input=move |ev| public_id.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="public_id"/>
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="password"/>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                {move || failure.get().map(|m| view! { <p class="error-message">{m}</p> })}
                <p>"Registering an authority? " <a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}
