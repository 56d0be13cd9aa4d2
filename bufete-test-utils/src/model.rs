//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main bufete crate to keep test code consistent with
//! the code under test.

/// Type alias for client database model.
pub type ClientModel = entity::client::Model;

/// Type alias for attorney database model.
pub type AttorneyModel = entity::attorney::Model;

/// Type alias for affair database model.
pub type AffairModel = entity::affair::Model;

/// Type alias for assignment database model.
pub type AssignmentModel = entity::assignment::Model;
