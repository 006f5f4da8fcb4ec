use super::*;

#[test]
fn require_trims_and_accepts_value() {
    let mut errors = FieldErrors::default();
    assert_eq!(errors.require("title", "  Deed  ", "Title is required"), Some("Deed".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn require_records_message_for_blank_value() {
    let mut errors = FieldErrors::default();
    assert_eq!(errors.require("title", "   ", "Title is required"), None);
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn require_some_records_message_for_missing_value() {
    let mut errors = FieldErrors::default();
    assert_eq!(errors.require_some::<()>("file", None, "File is required"), None);
    assert_eq!(errors.require_some("other", Some(3), "unused"), Some(3));
    assert_eq!(errors.get("file"), Some("File is required"));
    assert_eq!(errors.get("other"), None);
}

#[test]
fn require_index_parses_whole_numbers() {
    let mut errors = FieldErrors::default();
    assert_eq!(require_index(&mut errors, "index", " 12 ", "req", "bad"), Some(12));
    assert!(errors.is_empty());
}

#[test]
fn require_index_distinguishes_blank_and_invalid() {
    let mut errors = FieldErrors::default();
    assert_eq!(require_index(&mut errors, "index", "", "req", "bad"), None);
    assert_eq!(errors.get("index"), Some("req"));

    let mut errors = FieldErrors::default();
    for raw in ["-1", "1.5", "abc"] {
        assert_eq!(require_index(&mut errors, "index", raw, "req", "bad"), None);
        assert_eq!(errors.get("index"), Some("bad"));
    }
}
