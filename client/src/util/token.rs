//! Bearer-token claim decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues compact JWS access tokens. The client only reads the
//! payload to learn who is signed in, which role they hold, and when the token
//! expires. The signature is never checked here: role routing in the browser
//! is cosmetic and the backend re-validates every bearer token it receives.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::net::types::deserialize_opt_string_from_any;

/// Permission class carried in the token's `role` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Authority,
}

impl Role {
    /// Dashboard a session with this role lands on.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::User => "/user",
            Self::Authority => "/authority",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Authority => "authority",
        }
    }
}

/// Claims read from the token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    pub public_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    pub username: Option<String>,
    pub role: Role,
    /// Expiry in unix seconds. Absent means the client never expires it.
    #[serde(default, deserialize_with = "deserialize_opt_unix_secs")]
    pub exp: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_unix_secs")]
    pub iat: Option<i64>,
}

/// NumericDate per RFC 7519 may carry a fraction; whole seconds are kept.
fn deserialize_opt_unix_secs<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    let Some(raw) = Option::<Raw>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let secs = match raw {
        Raw::Signed(n) => n,
        Raw::Unsigned(n) => i64::try_from(n).unwrap_or(i64::MAX),
        // `as` saturates at the i64 bounds.
        #[allow(clippy::cast_possible_truncation)]
        Raw::Float(f) if f.is_finite() => f.floor() as i64,
        Raw::Float(f) => return Err(D::Error::custom(format!("non-finite timestamp {f}"))),
    };
    Ok(Some(secs))
}

impl Claims {
    /// `true` once `exp` lies strictly before `now` (unix seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp < now)
    }

    /// Best available human identifier for the signed-in principal.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.public_id.as_deref())
            .or(self.user_id.as_deref())
            .unwrap_or(self.role.label())
    }
}

/// Reasons a token cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Not three dot-separated segments with a non-empty payload.
    #[error("token is not a compact JWS")]
    Shape,

    /// Payload segment is not valid base64url.
    #[error("token payload is not base64url: {0}")]
    Base64(String),

    /// Payload is not a JSON claims object with a known role.
    #[error("token claims are invalid: {0}")]
    Json(String),
}

/// Decode the claims of a compact JWS without verifying its signature.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is structurally malformed, the
/// payload is not base64url, or the claims do not deserialize.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Shape);
    };
    if payload.is_empty() {
        return Err(TokenError::Shape);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// `Authorization` header value for a bearer token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
