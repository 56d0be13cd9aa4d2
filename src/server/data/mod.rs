//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM queries for each record type. They are generic over
//! `ConnectionTrait` so the same repository works with a plain connection or inside a
//! transaction opened by a service.

pub mod affair;
pub mod assignment;
pub mod attorney;
pub mod client;
pub mod page;
