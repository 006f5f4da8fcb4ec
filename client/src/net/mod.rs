//! Networking modules for the document backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `error` classifies their failures, and `types`
//! defines the backend's JSON schema.

pub mod api;
pub mod error;
pub mod types;
