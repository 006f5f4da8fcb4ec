//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock, file
//! inputs) and pure decisions (token decoding, route access, validation) from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod clock;
pub mod files;
pub mod form;
pub mod format;
pub mod ipfs;
pub mod storage;
pub mod token;
