//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types without importing from the `entity` crate
//! directly.

/// Type alias for client database model.
///
/// Represents a party owning zero or more affairs.
///
/// # Fields (from `entity::client::Model`)
/// - `id` - Primary key
/// - `dni` - National identity document number (unique)
/// - `full_name` - Client's full name
/// - `address` - Postal address (nullable)
/// - `nacionality` - Client's nationality
/// - `birthdate` - Client's date of birth
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type ClientModel = entity::client::Model;

/// Type alias for attorney database model.
///
/// # Fields (from `entity::attorney::Model`)
/// - `id` - Primary key
/// - `dni` - National identity document number (unique)
/// - `full_name` - Attorney's full name
/// - `address` - Postal address (nullable)
/// - `nacionality` - Attorney's nationality
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type AttorneyModel = entity::attorney::Model;

/// Type alias for affair database model.
///
/// Represents a case file belonging to exactly one client.
///
/// # Fields (from `entity::affair::Model`)
/// - `id` - Primary key
/// - `file_number` - Case file number, exactly 6 characters (unique)
/// - `start_date` - Date the case was opened
/// - `finish_date` - Date the case was closed (nullable)
/// - `status` - Free-form case status
/// - `client_id` - Foreign key to the owning client
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type AffairModel = entity::affair::Model;

/// Type alias for assignment database model.
///
/// Links one affair to one attorney; each pair appears at most once.
pub type AssignmentModel = entity::assignment::Model;
