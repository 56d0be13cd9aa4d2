//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for inserting records during test execution
//! (Phase 2 of the test architecture):
//!
//! - `client` - Client records
//! - `attorney` - Attorney records
//! - `affair` - Affair records, optionally with their owning client
//! - `assignment` - Assignment records linking affairs and attorneys
//! - `factory` - In-memory models that never touch the database

pub mod affair;
pub mod assignment;
pub mod attorney;
pub mod client;
pub mod factory;

use chrono::NaiveDate;

/// Birthdate given to every mock client.
pub fn mock_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1985, 6, 15).unwrap()
}

/// Start date given to every mock affair.
pub fn mock_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 2, 28).unwrap()
}
