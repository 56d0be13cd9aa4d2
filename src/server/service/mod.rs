//! Service layer for business logic.
//!
//! Services own the write transactions: they load the rows a write could collide with,
//! run the pure validators, persist the change and commit, or drop the transaction and
//! return every field error found. Reads are converted into the DTOs of `crate::model`.

pub mod affair;
pub mod assignment;
pub mod attorney;
pub mod cascade;
pub mod client;
pub mod nested;
pub mod summary;
