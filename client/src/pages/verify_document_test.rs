use super::*;

#[test]
fn validate_verify_requires_both_fields() {
    let errors = validate_verify("", "").unwrap_err();
    assert_eq!(errors.get("tx_hash"), Some("Transaction hash is required"));
    assert_eq!(errors.get("index"), Some("Document index is required"));
}

#[test]
fn validate_verify_rejects_negative_and_fractional_index() {
    for raw in ["-1", "1.5", "abc"] {
        let errors = validate_verify("0xabc", raw).unwrap_err();
        assert_eq!(errors.get("index"), Some("Document index must be a non-negative whole number"), "{raw}");
    }
}

#[test]
fn validate_verify_parses_index_as_number() {
    assert_eq!(validate_verify(" 0xabc ", " 12 "), Ok((12, "0xabc".to_owned())));
    assert_eq!(validate_verify("0xabc", "0"), Ok((0, "0xabc".to_owned())));
}

#[test]
fn verification_rows_none_when_missing() {
    assert_eq!(verification_rows(&VerifyResult::default()), None);
}

#[test]
fn verification_rows_render_found_document() {
    let result = VerifyResult {
        exists: true,
        title: Some("Deed".to_owned()),
        issuer: Some("0x1".to_owned()),
        receiver: Some("0x2".to_owned()),
        timestamp: Some(1_714_566_600),
        flagged: true,
    };
    let rows = verification_rows(&result).unwrap();
    assert_eq!(rows[0], ("Title", "Deed".to_owned()));
    assert_eq!(rows[3], ("Timestamp", "May 1, 2024, 12:30 UTC".to_owned()));
    assert_eq!(rows[4], ("Flagged", "Yes".to_owned()));
}

// =============================================================
// verify_outcome
// =============================================================

#[test]
fn verify_outcome_passes_result_through() {
    let found = VerifyResult { exists: true, title: Some("Deed".to_owned()), ..VerifyResult::default() };
    assert_eq!(verify_outcome(Ok(found.clone())), Ok(found));
}

#[test]
fn verify_outcome_falls_back_to_verification_failed() {
    let err = verify_outcome(Err(ApiError::Decode("eof".to_owned()))).unwrap_err();
    assert_eq!(err, Message::Error(VERIFY_FAILED.to_owned()));

    let body = r#"{"error":"Invalid transaction hash"}"#.to_owned();
    let err = verify_outcome(Err(ApiError::Status { status: 400, body })).unwrap_err();
    assert_eq!(err, Message::Error("Invalid transaction hash".to_owned()));
}
