use super::*;

#[test]
fn parse_flag_accepts_select_values_only() {
    assert_eq!(parse_flag("true"), Some(true));
    assert_eq!(parse_flag("false"), Some(false));
    assert_eq!(parse_flag(""), None);
    assert_eq!(parse_flag("yes"), None);
}

#[test]
fn validate_flag_requires_flag_value() {
    let errors = validate_flag("4", "").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("flag"), Some("Flag value is required"));
}

#[test]
fn validate_flag_requires_index() {
    let errors = validate_flag("", "true").unwrap_err();
    assert_eq!(errors.get("index"), Some("Document index is required"));
}

#[test]
fn validate_flag_sends_unflag_as_false() {
    assert_eq!(validate_flag("4", "false"), Ok((4, false)));
    assert_eq!(validate_flag("0", "true"), Ok((0, true)));
}

// =============================================================
// flag_outcome
// =============================================================

#[test]
fn flag_outcome_uses_backend_confirmation() {
    let resp = FlagResponse { message: Some("Document flagged".to_owned()) };
    assert_eq!(flag_outcome(Ok(resp)), Message::Success("Document flagged".to_owned()));
}

#[test]
fn flag_outcome_defaults_confirmation_text() {
    assert_eq!(flag_outcome(Ok(FlagResponse::default())), Message::Success(FLAG_UPDATED.to_owned()));
}

#[test]
fn flag_outcome_falls_back_to_generic_failure() {
    let err = ApiError::Status { status: 500, body: "<html>".to_owned() };
    assert_eq!(flag_outcome(Err(err)), Message::Error(FLAG_FAILED.to_owned()));
    assert_eq!(flag_outcome(Err(ApiError::Unavailable)), Message::Error(FLAG_FAILED.to_owned()));
}
