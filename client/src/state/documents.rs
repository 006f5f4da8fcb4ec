//! Document handed from a list view to the detail view.
//!
//! DESIGN
//! ======
//! The backend has no single-document endpoint, so list views pass the clicked
//! document along twice: as JSON in the pushed history entry, which survives
//! reloads and back/forward, and in memory as a fallback. Nothing else is
//! cached: every list view fetches fresh data when it mounts.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Document;

/// Which listing a selected document came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    Uploaded,
    Issued,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDocument {
    #[serde(rename = "doc")]
    pub document: Document,
    pub source: DocumentSource,
}

impl SelectedDocument {
    /// JSON stored as the history entry's state.
    pub fn to_history_state(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Read a history state back, only when it belongs to route id `id`.
    ///
    /// Anything that is not a selection written by [`Self::to_history_state`]
    /// yields `None`.
    pub fn from_history_state(raw: &str, id: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .filter(|s| s.document.id == id)
    }
}

/// The most recently opened document, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSelection {
    pub selected: Option<SelectedDocument>,
}

impl DocumentSelection {
    pub fn select(&mut self, document: Document, source: DocumentSource) {
        self.selected = Some(SelectedDocument { document, source });
    }

    /// The selection, only when it belongs to route id `id`.
    pub fn lookup(&self, id: &str) -> Option<&SelectedDocument> {
        self.selected.as_ref().filter(|s| s.document.id == id)
    }
}

/// Detail route for a document.
pub fn detail_path(id: &str) -> String {
    format!("/documents/{id}")
}
