mod delete;

use bufete_test_utils::prelude::*;

use crate::{
    model::{assignment::AssignmentAttributes, attorney::AttorneyParams},
    server::error::validation::FieldError,
};

use super::*;

fn attorney_params(dni: &str, rows: Vec<AssignmentAttributes>) -> AttorneyParams {
    AttorneyParams {
        dni: Some(dni.to_string()),
        full_name: Some("Maria Gomez".to_string()),
        address: None,
        nacionality: Some("Argentina".to_string()),
        assignments_attributes: rows,
    }
}

fn row(affair_id: Option<i32>) -> AssignmentAttributes {
    AssignmentAttributes {
        affair_id,
        ..Default::default()
    }
}
