//! Test utilities for the Bufete workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a
//! test needs, and the [`TestContext`] it builds exposes the in-memory database together
//! with fixture helpers for inserting further records during the test itself.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
