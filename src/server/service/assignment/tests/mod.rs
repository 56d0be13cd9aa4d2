
use bufete_test_utils::prelude::*;

use crate::{model::assignment::AssignmentParams, server::error::validation::FieldError};

use super::*;

fn assignment_params(affair_id: i32, attorney_id: i32) -> AssignmentParams {
    AssignmentParams {
        affair_id: Some(affair_id),
        attorney_id: Some(attorney_id),
    }
}
