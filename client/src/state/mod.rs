//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `documents`) so individual views can
//! depend on small focused models. Form state stays local to each page.

pub mod auth;
pub mod documents;
