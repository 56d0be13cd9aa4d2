//! HTTP controller endpoints for the Bufete web API.
//!
//! One module per record type, plus the landing page summary. Handlers deserialize the
//! allow-listed params, call the record's service and map its result to a JSON response;
//! errors are converted by [`crate::server::error::Error`]'s `IntoResponse`.

pub mod affair;
pub mod assignment;
pub mod attorney;
pub mod client;
pub mod summary;
