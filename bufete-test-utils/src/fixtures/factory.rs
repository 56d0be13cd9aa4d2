//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating record models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests.

use chrono::Utc;

use crate::{
    fixtures::{mock_birthdate, mock_start_date},
    model::{AffairModel, AssignmentModel, AttorneyModel, ClientModel},
};

/// Create a mock client model with the provided ID and dni.
pub fn mock_client_model(id: i32, dni: &str) -> ClientModel {
    let now = Utc::now().naive_utc();
    ClientModel {
        id,
        dni: dni.to_string(),
        full_name: "Andres Felipe".to_string(),
        address: None,
        nacionality: "Colombia".to_string(),
        birthdate: mock_birthdate(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock attorney model with the provided ID and dni.
pub fn mock_attorney_model(id: i32, dni: &str) -> AttorneyModel {
    let now = Utc::now().naive_utc();
    AttorneyModel {
        id,
        dni: dni.to_string(),
        full_name: "Maria Gomez".to_string(),
        address: None,
        nacionality: "Argentina".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock affair model owned by `client_id`.
pub fn mock_affair_model(id: i32, file_number: &str, client_id: i32) -> AffairModel {
    let now = Utc::now().naive_utc();
    AffairModel {
        id,
        file_number: file_number.to_string(),
        start_date: mock_start_date(),
        finish_date: None,
        status: "unknown".to_string(),
        client_id,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock assignment model linking `affair_id` and `attorney_id`.
pub fn mock_assignment_model(id: i32, affair_id: i32, attorney_id: i32) -> AssignmentModel {
    let now = Utc::now().naive_utc();
    AssignmentModel {
        id,
        affair_id,
        attorney_id,
        created_at: now,
        updated_at: now,
    }
}
