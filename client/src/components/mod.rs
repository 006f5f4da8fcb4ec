//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome (sidebar, guard, message blocks) and
//! document presentation used by several pages. They read session and
//! selection state from Leptos context providers.

pub mod document_card;
pub mod document_fields;
pub mod document_result;
pub mod field_error;
pub mod message_block;
pub mod protected;
pub mod sidebar;
pub mod stat_card;
