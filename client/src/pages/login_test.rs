use super::*;
use crate::net::types::LoginUser;

#[test]
fn validate_login_requires_both_fields() {
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.get("public_id"), Some("Public ID is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

#[test]
fn validate_login_treats_whitespace_id_as_missing() {
    let errors = validate_login("   ", "pw").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("public_id"), Some("Public ID is required"));
}

#[test]
fn validate_login_trims_id_but_not_password() {
    assert_eq!(validate_login(" PID-1 ", " pw "), Ok(("PID-1".to_owned(), " pw ".to_owned())));
}

#[test]
fn resolve_login_needs_access_and_refresh() {
    let only_access = LoginResponse { access: Some("a".to_owned()), ..LoginResponse::default() };
    assert_eq!(resolve_login(&only_access), Err(INVALID_CREDENTIALS));
    assert_eq!(resolve_login(&LoginResponse::default()), Err(INVALID_CREDENTIALS));
}

#[test]
fn resolve_login_returns_token_and_reported_role() {
    let response = LoginResponse {
        access: Some("tok".to_owned()),
        refresh: Some("ref".to_owned()),
        user: Some(LoginUser { role: Some(Role::Authority) }),
    };
    assert_eq!(resolve_login(&response), Ok(("tok".to_owned(), Some(Role::Authority))));
}

#[test]
fn post_login_path_prefers_reported_role() {
    assert_eq!(post_login_path(Some(Role::Authority), Role::User), "/authority");
    assert_eq!(post_login_path(None, Role::Authority), "/authority");
    assert_eq!(post_login_path(None, Role::User), "/user");
}

// =============================================================
// login_outcome
// =============================================================

#[test]
fn login_outcome_falls_back_to_generic_message() {
    let err = login_outcome(Err(ApiError::Network("offline".to_owned()))).unwrap_err();
    assert_eq!(err, GENERIC_FAILURE);
}

#[test]
fn login_outcome_prefers_backend_error_text() {
    let body = r#"{"detail":"No active account found with the given credentials"}"#.to_owned();
    let err = login_outcome(Err(ApiError::Status { status: 401, body })).unwrap_err();
    assert_eq!(err, "No active account found with the given credentials");
}

#[test]
fn login_outcome_without_tokens_is_invalid_credentials() {
    let err = login_outcome(Ok(LoginResponse::default())).unwrap_err();
    assert_eq!(err, INVALID_CREDENTIALS);
}
