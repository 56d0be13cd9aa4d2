//! Request parameters and response bodies exchanged over the HTTP API.

pub mod affair;
pub mod api;
pub mod assignment;
pub mod attorney;
pub mod client;
