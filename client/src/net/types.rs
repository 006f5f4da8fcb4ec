//! Wire DTOs for the document backend.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads. Almost every field is optional
//! because the backend omits what it does not know, and views render optional
//! fields only when present.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::token::Role;

/// A document reference as returned by upload, issue, and listing calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Backend row identifier; numeric on the wire, kept as text here.
    #[serde(deserialize_with = "deserialize_string_from_any")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Content address of the stored file.
    #[serde(default)]
    pub ipfs_hash: Option<String>,
    /// Ledger transaction that recorded the document.
    #[serde(default)]
    pub tx_hash: Option<String>,
    /// Position of the document in the on-chain registry.
    #[serde(default)]
    pub document_index: Option<u64>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_public_id: Option<String>,
    #[serde(default)]
    pub issuer_name: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub receiver_public_id: Option<String>,
    /// RFC 3339 timestamp, present on uploaded documents.
    #[serde(default)]
    pub uploaded_at: Option<String>,
    /// RFC 3339 timestamp, present on issued documents.
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub flagged: Option<bool>,
}

impl Document {
    /// Title for display, with a placeholder for untitled documents.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or("Untitled Document")
    }

    /// Whichever timestamp the document carries, preferring issuance.
    pub fn timestamp(&self) -> Option<&str> {
        self.issued_at.as_deref().or(self.uploaded_at.as_deref())
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged.unwrap_or(false)
    }
}

/// Response of `GET documents/user-documents/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocuments {
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub user_uploaded_documents: Vec<Document>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub authority_issued_documents: Vec<Document>,
}

/// Counts shown on the user dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserCounts {
    pub uploaded: usize,
    pub issued_to_me: usize,
    pub flagged: usize,
}

impl UserDocuments {
    pub fn counts(&self) -> UserCounts {
        UserCounts {
            uploaded: self.user_uploaded_documents.len(),
            issued_to_me: self.authority_issued_documents.len(),
            flagged: flagged_count(&self.user_uploaded_documents) + flagged_count(&self.authority_issued_documents),
        }
    }
}

/// Number of documents carrying the flagged marker.
pub fn flagged_count(documents: &[Document]) -> usize {
    documents.iter().filter(|d| d.is_flagged()).count()
}

/// Response of `POST blockchain/verify/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub exists: bool,
    #[serde(default)]
    pub title: Option<String>,
    /// Issuer ledger address.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Receiver ledger address.
    #[serde(default)]
    pub receiver: Option<String>,
    /// Block timestamp in unix seconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub flagged: bool,
}

/// Response of `GET users/stats/`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub documents_issued: u64,
    #[serde(default)]
    pub documents_verified: u64,
    #[serde(default)]
    pub authorities_registered: u64,
}

/// Response of `POST users/login/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

/// User summary embedded in the login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub role: Option<Role>,
}

/// Response of `POST users/authority/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub username: Option<String>,
}

/// Response of `POST blockchain/flag/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FlagResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope around the document returned by upload and issue calls.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocumentEnvelope {
    pub document: Document,
}

/// Accept either a JSON string or an integer and keep it as text.
pub(crate) fn deserialize_string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Signed(n) => n.to_string(),
        Raw::Unsigned(n) => n.to_string(),
    })
}

/// Like [`deserialize_string_from_any`], for optional fields.
pub(crate) fn deserialize_opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_string_from_any")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|w| w.0))
}

/// Treat an explicit `null` list the same as a missing one.
fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
