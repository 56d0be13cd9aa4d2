//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an `AppState` built from the test database, and
//! the status code of their response is checked.

mod affair;
mod assignment;
mod attorney;
mod client;
mod summary;

use bufete_test_utils::prelude::*;
