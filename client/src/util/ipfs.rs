//! Gateway URLs for content-addressed documents.

#[cfg(test)]
#[path = "ipfs_test.rs"]
mod ipfs_test;

const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Public URL for `content_address` on `gateway`.
pub fn gateway_url(gateway: &str, content_address: &str) -> String {
    format!("{}/ipfs/{}", gateway.trim_end_matches('/'), content_address.trim())
}

/// Gateway URL using the configured gateway.
pub fn document_url(content_address: &str) -> String {
    gateway_url(crate::config::ipfs_gateway(), content_address)
}

/// Whether the address names an image that can be shown inline.
pub fn is_image_address(content_address: &str) -> bool {
    let lower = content_address.trim().to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Whether a selected file's MIME type can be previewed as an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}
