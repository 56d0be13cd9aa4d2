//! Rules checked against storage snapshots, shared by the per-record validators.
//!
//! Presence and length rules are declared on the params with `validator`; these run after
//! them, and callers only check uniqueness on values that passed those rules.

use crate::server::error::validation::{FieldError, ValidationErrors};

/// Absent, empty or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Normalize a string field, treating blank input as absent.
pub fn optional_string(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !is_blank(Some(v)))
        .map(ToString::to_string)
}

/// Check a foreign key, which must be present and refer to an existing row.
pub fn reference(
    errors: &mut ValidationErrors,
    field: &str,
    id: Option<i32>,
    exists: bool,
) -> Option<i32> {
    match id {
        Some(id) if exists => Some(id),
        _ => {
            errors.add(field, FieldError::MustExist);
            None
        }
    }
}

/// Check that no other row holds the value, where `holder` is the row currently holding it.
///
/// The record being updated (`current_id`) never collides with itself.
pub fn unique(
    errors: &mut ValidationErrors,
    field: &str,
    holder: Option<i32>,
    current_id: Option<i32>,
) -> bool {
    match holder {
        Some(holder) if Some(holder) != current_id => {
            errors.add(field, FieldError::Taken);
            false
        }
        _ => true,
    }
}
