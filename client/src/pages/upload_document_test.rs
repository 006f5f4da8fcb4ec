use super::*;

#[test]
fn validate_upload_requires_title_and_file() {
    let errors = validate_upload::<()>("", None).unwrap_err();
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(errors.get("file"), Some("File is required"));
}

#[test]
fn validate_upload_missing_file_blocks_submit() {
    let errors = validate_upload::<()>("Passport", None).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("file"), Some("File is required"));
}

#[test]
fn validate_upload_blank_title_blocks_submit() {
    let errors = validate_upload("  ", Some(())).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("title"), Some("Title is required"));
}

#[test]
fn validate_upload_accepts_trimmed_title() {
    assert_eq!(validate_upload(" Passport ", Some(7)), Ok(("Passport".to_owned(), 7)));
}


// =============================================================
// upload_outcome
// =============================================================

#[test]
fn upload_outcome_keeps_document_on_success() {
    let document = Document { id: "3".to_owned(), ..Document::default() };
    let (stored, message) = upload_outcome(Ok(document.clone()));
    assert_eq!(stored, Some(document));
    assert_eq!(message, Message::Success(UPLOADED.to_owned()));
}

#[test]
fn upload_outcome_falls_back_to_upload_failed() {
    let (stored, message) = upload_outcome(Err(ApiError::Network("reset".to_owned())));
    assert_eq!(stored, None);
    assert_eq!(message, Message::Error(UPLOAD_FAILED.to_owned()));
}
