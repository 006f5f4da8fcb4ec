//! REST API helpers for communicating with the document backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so views can render the failure
//! inline. Authenticated calls attach `Authorization: Bearer <token>` from the
//! persisted token store; a missing token is sent as no header at all and the
//! backend decides.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Document, FlagResponse, LoginResponse, PlatformStats, RegisterResponse, UserDocuments, VerifyResult};
use crate::util::files::SelectedFile;

/// Text fields of an authority registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub username: String,
    pub password: String,
    pub name: String,
    pub public_id: String,
    pub sector: String,
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL of a backend path under the configured base URL.
pub fn endpoint(path: &str) -> String {
    join_url(crate::config::backend_url(), path)
}

fn login_payload(public_id: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "public_id": public_id, "password": password })
}

fn verify_payload(index: u64, tx_hash: &str) -> serde_json::Value {
    serde_json::json!({ "index": index, "tx_hash": tx_hash })
}

fn flag_payload(index: u64, flag: bool) -> serde_json::Value {
    serde_json::json!({ "index": index, "flag": flag })
}

fn upload_fields(title: &str) -> Vec<(&'static str, String)> {
    vec![("title", title.to_owned())]
}

fn issue_fields(receiver_id: &str, title: &str) -> Vec<(&'static str, String)> {
    vec![("receiver_id", receiver_id.to_owned()), ("title", title.to_owned())]
}

fn registration_fields(fields: &RegistrationFields) -> Vec<(&'static str, String)> {
    vec![
        ("username", fields.username.clone()),
        ("password", fields.password.clone()),
        ("name", fields.name.clone()),
        ("public_id", fields.public_id.clone()),
        ("sector", fields.sector.clone()),
    ]
}

// =============================================================================
// TRANSPORT (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    use crate::util::storage::TokenStore as _;

    match crate::util::storage::LocalTokenStore.load() {
        Some(token) => builder.header("Authorization", &crate::util::token::bearer_header(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    request
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Decode a JSON body, accepting any 2xx or exactly `expected` when given.
#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    expected: Option<u16>,
) -> Result<T, ApiError> {
    let status = resp.status();
    let accepted = expected.map_or_else(|| resp.ok(), |code| status == code);
    if !accepted {
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{} answered {status}", resp.url());
        return Err(ApiError::Status { status, body });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn multipart(fields: &[(&'static str, String)], file_field: &str, file: &SelectedFile) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("form data: {e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    form.append_with_blob_and_filename(file_field, file, &file.name()).map_err(js_err)?;
    Ok(form)
}

// =============================================================================
// CALLS
// =============================================================================

/// Sign in via `POST users/login/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects the
/// credentials.
pub async fn login(public_id: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&endpoint("users/login/")).json(&login_payload(public_id, password));
        read_json(send(request).await?, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = login_payload(public_id, password);
        Err(ApiError::Unavailable)
    }
}

/// Register an authority via multipart `POST users/authority/register/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects a
/// field (for example a taken username).
pub async fn register_authority(fields: &RegistrationFields, proof_document: &SelectedFile) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = multipart(&registration_fields(fields), "proof_document", proof_document)?;
        let request = gloo_net::http::Request::post(&endpoint("users/authority/register/")).body(form);
        read_json(send(request).await?, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (registration_fields(fields), proof_document);
        Err(ApiError::Unavailable)
    }
}

/// Fetch public platform counters from `GET users/stats/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_stats() -> Result<PlatformStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&endpoint("users/stats/")).build();
        read_json(send(request).await?, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Upload a user document via multipart `POST documents/upload/`.
/// Only `201 Created` counts as success.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend does not
/// answer `201`.
pub async fn upload_document(title: &str, file: &SelectedFile) -> Result<Document, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = multipart(&upload_fields(title), "file", file)?;
        let request = with_auth(gloo_net::http::Request::post(&endpoint("documents/upload/"))).body(form);
        let envelope: super::types::DocumentEnvelope = read_json(send(request).await?, Some(201)).await?;
        Ok(envelope.document)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (upload_fields(title), file);
        Err(ApiError::Unavailable)
    }
}

/// Issue a document to a receiver via multipart `POST documents/issue/`.
/// Only `201 Created` counts as success.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend does not
/// answer `201`.
pub async fn issue_document(receiver_id: &str, title: &str, file: &SelectedFile) -> Result<Document, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = multipart(&issue_fields(receiver_id, title), "file", file)?;
        let request = with_auth(gloo_net::http::Request::post(&endpoint("documents/issue/"))).body(form);
        let envelope: super::types::DocumentEnvelope = read_json(send(request).await?, Some(201)).await?;
        Ok(envelope.document)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (issue_fields(receiver_id, title), file);
        Err(ApiError::Unavailable)
    }
}

/// Documents uploaded by, and issued to, the signed-in user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_user_documents() -> Result<UserDocuments, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_auth(gloo_net::http::Request::get(&endpoint("documents/user-documents/"))).build();
        read_json(send(request).await?, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Documents issued by the signed-in authority. A `null` body is empty.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_authority_documents() -> Result<Vec<Document>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_auth(gloo_net::http::Request::get(&endpoint("documents/authority-documents/"))).build();
        let docs: Option<Vec<Document>> = read_json(send(request).await?, None).await?;
        Ok(docs.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Look a document up on the ledger via `POST blockchain/verify/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn verify_document(index: u64, tx_hash: &str) -> Result<VerifyResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request =
            with_auth(gloo_net::http::Request::post(&endpoint("blockchain/verify/"))).json(&verify_payload(index, tx_hash));
        read_json(send(request).await?, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = verify_payload(index, tx_hash);
        Err(ApiError::Unavailable)
    }
}

/// Set or clear the flagged marker via `POST blockchain/flag/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn flag_document(index: u64, flag: bool) -> Result<FlagResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request =
            with_auth(gloo_net::http::Request::post(&endpoint("blockchain/flag/"))).json(&flag_payload(index, flag));
        read_json(send(request).await?, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = flag_payload(index, flag);
        Err(ApiError::Unavailable)
    }
}
