//! Errors returned by backend calls and the messages shown for them.
//!
//! ERROR HANDLING
//! ==============
//! Views render failures inline. The backend's own `{"error": ...}` (or DRF's
//! `{"detail": ...}`) text wins when present; otherwise each view supplies its
//! fallback message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with an unexpected status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user, falling back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => error_detail(body).unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }

    /// Whether the backend flagged `field` in a validation error body.
    pub fn has_field_error(&self, field: &str) -> bool {
        let Self::Status { body, .. } = self else {
            return false;
        };
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .is_some_and(|v| v.get(field).is_some())
    }
}

/// Extract `error` (or `detail`) text from a JSON error body.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Message for a failed authority registration.
pub fn registration_error_message(err: &ApiError) -> String {
    if err.has_field_error("username") {
        "Username already exists. Please choose another.".to_owned()
    } else if err.has_field_error("email") {
        "User with this email already exists.".to_owned()
    } else {
        "An error occurred. Please try again.".to_owned()
    }
}
