//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read the host's environment at runtime, so the
//! backend base URL and the IPFS gateway are baked in at compile time from
//! `DOCUCHAIN_BACKEND_URL` and `DOCUCHAIN_IPFS_GATEWAY`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `DOCUCHAIN_BACKEND_URL` is unset at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000/api";

/// Public gateway used when `DOCUCHAIN_IPFS_GATEWAY` is unset at build time.
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io";

/// Base URL of the document backend, without a trailing slash.
pub fn backend_url() -> &'static str {
    normalize_base(option_env!("DOCUCHAIN_BACKEND_URL"), DEFAULT_BACKEND_URL)
}

/// Base URL of the IPFS gateway, without a trailing slash.
pub fn ipfs_gateway() -> &'static str {
    normalize_base(option_env!("DOCUCHAIN_IPFS_GATEWAY"), DEFAULT_IPFS_GATEWAY)
}

/// Trim whitespace and trailing slashes; blank values fall back to `default`.
fn normalize_base(raw: Option<&'static str>, default: &'static str) -> &'static str {
    let trimmed = raw.unwrap_or(default).trim().trim_end_matches('/');
    if trimmed.is_empty() { default } else { trimmed }
}
