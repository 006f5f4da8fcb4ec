use super::*;

// =============================================================
// Document
// =============================================================

#[test]
fn document_accepts_numeric_id_and_missing_optionals() {
    let doc: Document = serde_json::from_value(serde_json::json!({ "id": 42 })).unwrap();
    assert_eq!(doc.id, "42");
    assert!(doc.title.is_none());
    assert!(doc.ipfs_hash.is_none());
    assert!(!doc.is_flagged());
}

#[test]
fn document_parses_full_backend_payload() {
    let doc: Document = serde_json::from_value(serde_json::json!({
        "id": "7",
        "title": "Passport",
        "ipfs_hash": "QmHash",
        "tx_hash": "0xabc",
        "document_index": 3,
        "issuer_name": "Registry Office",
        "receiver_name": "Alice",
        "issued_at": "2024-05-01T12:30:00Z",
        "flagged": true
    }))
    .unwrap();
    assert_eq!(doc.display_title(), "Passport");
    assert_eq!(doc.document_index, Some(3));
    assert_eq!(doc.timestamp(), Some("2024-05-01T12:30:00Z"));
    assert!(doc.is_flagged());
}

#[test]
fn document_display_title_falls_back_for_blank_title() {
    let doc = Document { id: "1".to_owned(), title: Some("  ".to_owned()), ..Document::default() };
    assert_eq!(doc.display_title(), "Untitled Document");
}

#[test]
fn document_timestamp_prefers_issued_at() {
    let doc = Document {
        id: "1".to_owned(),
        uploaded_at: Some("2024-01-01T00:00:00Z".to_owned()),
        issued_at: Some("2024-02-01T00:00:00Z".to_owned()),
        ..Document::default()
    };
    assert_eq!(doc.timestamp(), Some("2024-02-01T00:00:00Z"));
}

// =============================================================
// UserDocuments
// =============================================================

#[test]
fn user_documents_default_missing_and_null_lists_to_empty() {
    let docs: UserDocuments =
        serde_json::from_value(serde_json::json!({ "user_uploaded_documents": null })).unwrap();
    assert!(docs.user_uploaded_documents.is_empty());
    assert!(docs.authority_issued_documents.is_empty());
}

#[test]
fn user_documents_counts_include_flagged_from_both_lists() {
    let docs: UserDocuments = serde_json::from_value(serde_json::json!({
        "user_uploaded_documents": [
            { "id": 1, "flagged": true },
            { "id": 2 }
        ],
        "authority_issued_documents": [
            { "id": 3, "flagged": true },
            { "id": 4, "flagged": false },
            { "id": 5 }
        ]
    }))
    .unwrap();
    assert_eq!(docs.counts(), UserCounts { uploaded: 2, issued_to_me: 3, flagged: 2 });
}

// =============================================================
// Other responses
// =============================================================

#[test]
fn verify_result_not_found_payload() {
    let result: VerifyResult = serde_json::from_value(serde_json::json!({ "exists": false })).unwrap();
    assert!(!result.exists);
    assert!(!result.flagged);
    assert!(result.timestamp.is_none());
}

#[test]
fn platform_stats_defaults_missing_counters() {
    let stats: PlatformStats = serde_json::from_value(serde_json::json!({ "documents_issued": 12 })).unwrap();
    assert_eq!(stats.documents_issued, 12);
    assert_eq!(stats.documents_verified, 0);
    assert_eq!(stats.authorities_registered, 0);
}

#[test]
fn login_response_reads_role_from_user() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "access": "a.b.c",
        "refresh": "r",
        "user": { "role": "authority", "public_id": "AUTH-1" }
    }))
    .unwrap();
    assert_eq!(resp.user.and_then(|u| u.role), Some(Role::Authority));
}

#[test]
fn document_envelope_unwraps_document() {
    let env: DocumentEnvelope =
        serde_json::from_value(serde_json::json!({ "document": { "id": 9, "title": "Deed" } })).unwrap();
    assert_eq!(env.document.id, "9");
}
