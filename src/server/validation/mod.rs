//! Field validation for record writes.
//!
//! Validators are pure functions: they take the submitted parameters together with a
//! read-only snapshot of the rows the write could collide with or refer to, and return
//! either the validated values ready to persist or every field error found. Services are
//! responsible for loading the snapshot inside the write's transaction.

pub mod affair;
pub mod assignment;
pub mod attorney;
pub mod client;
pub mod nested;
pub mod rules;
