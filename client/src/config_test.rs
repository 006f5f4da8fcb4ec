use super::*;

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base(Some("https://api.example.com/api//"), DEFAULT_BACKEND_URL), "https://api.example.com/api");
}

#[test]
fn normalize_base_uses_default_when_unset() {
    assert_eq!(normalize_base(None, DEFAULT_IPFS_GATEWAY), "https://ipfs.io");
}

#[test]
fn normalize_base_uses_default_when_blank() {
    assert_eq!(normalize_base(Some("   "), DEFAULT_BACKEND_URL), DEFAULT_BACKEND_URL);
}

#[test]
fn configured_urls_have_no_trailing_slash() {
    assert!(!backend_url().ends_with('/'));
    assert!(!ipfs_gateway().ends_with('/'));
}
