
use bufete_test_utils::prelude::*;
use chrono::NaiveDate;

use crate::{
    model::{affair::AffairParams, assignment::AssignmentAttributes},
    server::error::validation::FieldError,
};

use super::*;

fn affair_params(file_number: &str, client_id: i32) -> AffairParams {
    AffairParams {
        file_number: Some(file_number.to_string()),
        client_id: Some(client_id),
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        finish_date: None,
        status: Some("abierto".to_string()),
        assignments_attributes: Vec::new(),
    }
}

fn row(attorney_id: Option<i32>) -> AssignmentAttributes {
    AssignmentAttributes {
        attorney_id,
        ..Default::default()
    }
}
