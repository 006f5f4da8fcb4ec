use super::*;

#[test]
fn validate_issue_reports_all_missing_fields() {
    let errors = validate_issue::<()>("", "", None).unwrap_err();
    assert_eq!(errors.get("receiver_id"), Some("Receiver ID is required"));
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(errors.get("file"), Some("File is required"));
    assert_eq!(errors.len(), 3);
}

#[test]
fn validate_issue_missing_receiver_blocks_submit() {
    let errors = validate_issue(" ", "Licence", Some(())).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("receiver_id"), Some("Receiver ID is required"));
}

#[test]
fn validate_issue_builds_trimmed_request() {
    let request = validate_issue(" R-9 ", "Licence ", Some("licence.pdf")).unwrap();
    assert_eq!(request, IssueRequest { receiver_id: "R-9".to_owned(), title: "Licence".to_owned(), file: "licence.pdf" });
}

// =============================================================
// issue_outcome
// =============================================================

#[test]
fn issue_failure_prefers_backend_error_then_fallback() {
    let body = r#"{"error":"Receiver not found"}"#.to_owned();
    let (stored, message) = issue_outcome(Err(ApiError::Status { status: 404, body }));
    assert_eq!(stored, None);
    assert_eq!(message, Message::Error("Receiver not found".to_owned()));

    let (_, message) = issue_outcome(Err(ApiError::Unavailable));
    assert_eq!(message, Message::Error(ISSUE_FAILED.to_owned()));
}

#[test]
fn issue_success_reports_issued() {
    let (stored, message) = issue_outcome(Ok(Document::default()));
    assert!(stored.is_some());
    assert_eq!(message, Message::Success(ISSUED.to_owned()));
}
