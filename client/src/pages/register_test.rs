use super::*;

fn filled() -> RegistrationInput {
    RegistrationInput {
        username: "registry".to_owned(),
        password: "secret".to_owned(),
        name: "Land Registry".to_owned(),
        public_id: "AUTH-1".to_owned(),
        sector: "Government".to_owned(),
    }
}

#[test]
fn validate_registration_reports_every_missing_field() {
    let errors = validate_registration::<()>(&RegistrationInput::default(), None).unwrap_err();
    assert_eq!(errors.get("username"), Some("Username is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    assert_eq!(errors.get("name"), Some("Authority name is required"));
    assert_eq!(errors.get("public_id"), Some("Public ID is required"));
    assert_eq!(errors.get("sector"), Some("Sector is required"));
    assert_eq!(errors.get("proof_document"), Some("Proof document is required"));
    assert_eq!(errors.len(), 6);
}

#[test]
fn validate_registration_blocks_on_missing_proof_only() {
    let errors = validate_registration::<()>(&filled(), None).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("proof_document"), Some("Proof document is required"));
}

#[test]
fn validate_registration_keeps_public_id() {
    let (fields, proof) = validate_registration(&filled(), Some("proof.pdf")).unwrap();
    assert_eq!(fields.public_id, "AUTH-1");
    assert_eq!(fields.name, "Land Registry");
    assert_eq!(proof, "proof.pdf");
}

#[test]
fn validate_registration_trims_text_fields() {
    let mut input = filled();
    input.username = "  registry  ".to_owned();
    let (fields, ()) = validate_registration(&input, Some(())).unwrap();
    assert_eq!(fields.username, "registry");
}

// =============================================================
// registration_outcome
// =============================================================

#[test]
fn registration_outcome_requires_echoed_username() {
    let confirmed = RegisterResponse { username: Some("registry".to_owned()) };
    assert_eq!(registration_outcome(Ok(confirmed)), Ok(()));
    assert_eq!(registration_outcome(Ok(RegisterResponse::default())), Err(GENERIC_FAILURE.to_owned()));
}

#[test]
fn registration_outcome_reports_duplicate_username() {
    let body = r#"{"username":["A user with that username already exists."]}"#.to_owned();
    let err = registration_outcome(Err(ApiError::Status { status: 400, body })).unwrap_err();
    assert_eq!(err, "Username already exists. Please choose another.");
}
