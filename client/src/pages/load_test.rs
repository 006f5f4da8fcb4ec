use super::*;

#[test]
fn settle_ok_is_ready() {
    let load = Load::settle(Ok(3_u8), "failed");
    assert_eq!(load.ready(), Some(&3));
    assert_eq!(load.error(), None);
}

#[test]
fn settle_uses_backend_error_text() {
    let err = ApiError::Status { status: 400, body: r#"{"error":"Token invalid"}"#.to_owned() };
    let load = Load::<u8>::settle(Err(err), "failed");
    assert_eq!(load.error(), Some("Token invalid"));
}

#[test]
fn settle_falls_back_without_backend_text() {
    let load = Load::<u8>::settle(Err(ApiError::Network("offline".to_owned())), "Could not load documents.");
    assert_eq!(load.error(), Some("Could not load documents."));
    assert_eq!(load.ready(), None);
}

#[test]
fn loading_has_neither_value_nor_error() {
    let load = Load::<u8>::Loading;
    assert_eq!(load.ready(), None);
    assert_eq!(load.error(), None);
}
