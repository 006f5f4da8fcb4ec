use super::*;

fn status(body: &str) -> ApiError {
    ApiError::Status { status: 400, body: body.to_owned() }
}

#[test]
fn error_detail_prefers_error_key() {
    assert_eq!(
        error_detail(r#"{"error": "Invalid index", "detail": "ignored"}"#),
        Some("Invalid index".to_owned())
    );
}

#[test]
fn error_detail_falls_back_to_detail_key() {
    assert_eq!(
        error_detail(r#"{"detail": "Authentication credentials were not provided."}"#),
        Some("Authentication credentials were not provided.".to_owned())
    );
}

#[test]
fn error_detail_none_for_non_json_or_blank() {
    assert_eq!(error_detail("<html>502</html>"), None);
    assert_eq!(error_detail(r#"{"error": "  "}"#), None);
    assert_eq!(error_detail(r#"{"error": 5}"#), None);
}

#[test]
fn user_message_uses_backend_text_when_available() {
    assert_eq!(status(r#"{"error": "Document not found"}"#).user_message("Verification failed."), "Document not found");
}

#[test]
fn user_message_uses_fallback_otherwise() {
    assert_eq!(status("").user_message("Verification failed."), "Verification failed.");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("Something went wrong"), "Something went wrong");
    assert_eq!(ApiError::Unavailable.user_message("x"), "x");
}

#[test]
fn registration_error_maps_field_errors() {
    assert_eq!(
        registration_error_message(&status(r#"{"username": ["exists"]}"#)),
        "Username already exists. Please choose another."
    );
    assert_eq!(
        registration_error_message(&status(r#"{"email": ["exists"]}"#)),
        "User with this email already exists."
    );
    assert_eq!(registration_error_message(&status("{}")), "An error occurred. Please try again.");
    assert_eq!(
        registration_error_message(&ApiError::Decode("eof".to_owned())),
        "An error occurred. Please try again."
    );
}

#[test]
fn status_error_display_includes_code() {
    assert_eq!(status("").to_string(), "request failed with status 400");
}
