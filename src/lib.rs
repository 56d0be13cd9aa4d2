//! Bufete: record keeping for a law office.
//!
//! Manages clients, attorneys, affairs (legal cases) and the assignments linking affairs
//! to attorneys behind a JSON API, enforcing the integrity rules that span the four
//! record types.

pub mod model;
pub mod server;
