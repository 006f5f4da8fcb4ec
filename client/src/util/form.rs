//! Client-side form validation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every form validates required fields before any request is built, so a
//! missing field shows its message under the input and never reaches the
//! network. Page modules own their `validate_*` functions; this module holds
//! the shared error map.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

/// Per-field validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    /// Trimmed `value`, or record `message` for `field` when it is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &'static str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.0.insert(field, message);
            return None;
        }
        Some(trimmed.to_owned())
    }

    /// `value`, or record `message` for `field` when it is absent.
    pub fn require_some<T>(&mut self, field: &'static str, value: Option<T>, message: &'static str) -> Option<T> {
        if value.is_none() {
            self.0.insert(field, message);
        }
        value
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Parse a non-negative registry index typed into a number input.
///
/// Blank input records `required_message`; anything that is not a whole
/// number records `invalid_message`.
pub fn require_index(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    required_message: &'static str,
    invalid_message: &'static str,
) -> Option<u64> {
    let value = errors.require(field, raw, required_message)?;
    match value.parse::<u64>() {
        Ok(index) => Some(index),
        Err(_) => {
            errors.insert(field, invalid_message);
            None
        }
    }
}
