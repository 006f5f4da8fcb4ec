//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and `validate_*` rules and delegates shared
//! rendering to `components`. Guarding is applied by the router, not here.

pub mod authority_dashboard;
pub mod document_detail;
pub mod flag_document;
pub mod home;
pub mod issue_document;
pub mod issued_documents;
pub(crate) mod load;
pub mod login;
pub mod my_documents;
pub mod register;
pub mod upload_document;
pub mod user_dashboard;
pub mod verify_document;
