use super::*;
use base64::Engine as _;

fn make_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_claims_reads_role_expiry_and_numeric_user_id() {
    let token = make_token(&serde_json::json!({
        "token_type": "access",
        "user_id": 17,
        "role": "authority",
        "exp": 1_900_000_000,
        "iat": 1_800_000_000
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role, Role::Authority);
    assert_eq!(claims.user_id.as_deref(), Some("17"));
    assert_eq!(claims.exp, Some(1_900_000_000));
}

#[test]
fn decode_claims_accepts_numeric_public_id_and_username() {
    let token = make_token(&serde_json::json!({
        "role": "user",
        "public_id": 42,
        "username": 7,
        "exp": 1_800_000_000
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.public_id.as_deref(), Some("42"));
    assert_eq!(claims.username.as_deref(), Some("7"));
    assert_eq!(claims.exp, Some(1_800_000_000));
}

#[test]
fn decode_claims_floors_fractional_timestamps() {
    let token = make_token(&serde_json::json!({
        "role": "user",
        "exp": 1_900_000_000.5,
        "iat": 1_800_000_000.999
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.exp, Some(1_900_000_000));
    assert_eq!(claims.iat, Some(1_800_000_000));
    assert!(!claims.is_expired(1_900_000_000));
    assert!(claims.is_expired(1_900_000_001));
}

#[test]
fn decode_claims_treats_null_exp_as_absent() {
    let claims = decode_claims(&make_token(&serde_json::json!({ "role": "user", "exp": null }))).unwrap();
    assert_eq!(claims.exp, None);
}

#[test]
fn decode_claims_tolerates_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"role": "user"}"#);
    assert!(payload.ends_with('='));
    let token = format!("h.{payload}.s");
    assert_eq!(decode_claims(&token).unwrap().role, Role::User);
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    assert_eq!(decode_claims("only.two"), Err(TokenError::Shape));
    assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Shape));
    assert_eq!(decode_claims(""), Err(TokenError::Shape));
}

#[test]
fn decode_claims_rejects_empty_payload() {
    assert_eq!(decode_claims("header..sig"), Err(TokenError::Shape));
}

#[test]
fn decode_claims_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("h.!!!.s"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode("not json");
    assert!(matches!(decode_claims(&format!("h.{payload}.s")), Err(TokenError::Json(_))));
}

#[test]
fn decode_claims_rejects_missing_or_unknown_role() {
    let missing = make_token(&serde_json::json!({ "user_id": 1 }));
    assert!(matches!(decode_claims(&missing), Err(TokenError::Json(_))));

    let unknown = make_token(&serde_json::json!({ "user_id": 1, "role": "admin" }));
    assert!(matches!(decode_claims(&unknown), Err(TokenError::Json(_))));
}

// =============================================================
// Claims
// =============================================================

#[test]
fn claims_expired_only_when_exp_strictly_in_past() {
    let claims = decode_claims(&make_token(&serde_json::json!({ "role": "user", "exp": 100 }))).unwrap();
    assert!(claims.is_expired(101));
    assert!(!claims.is_expired(100));
    assert!(!claims.is_expired(99));
}

#[test]
fn claims_without_exp_never_expire() {
    let claims = decode_claims(&make_token(&serde_json::json!({ "role": "user" }))).unwrap();
    assert!(!claims.is_expired(i64::MAX));
}

#[test]
fn claims_display_name_prefers_username_then_public_id() {
    let claims = decode_claims(&make_token(&serde_json::json!({
        "role": "user",
        "public_id": "PID-9",
        "user_id": 3
    })))
    .unwrap();
    assert_eq!(claims.display_name(), "PID-9");

    let bare = decode_claims(&make_token(&serde_json::json!({ "role": "authority" }))).unwrap();
    assert_eq!(bare.display_name(), "authority");
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_home_paths() {
    assert_eq!(Role::User.home_path(), "/user");
    assert_eq!(Role::Authority.home_path(), "/authority");
}

#[test]
fn bearer_header_prefixes_scheme() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}
