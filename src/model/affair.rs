use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::assignment::{AssignmentAttributes, AssignmentDto};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AffairDto {
    pub id: i32,
    pub file_number: String,
    pub start_date: NaiveDate,
    pub finish_date: Option<NaiveDate>,
    pub status: String,
    pub client_id: i32,
    pub assignments: Vec<AssignmentDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Allow-listed affair attributes accepted on create & update
///
/// Also returned by the new & edit form routes, pre-populated with the current
/// values and one row per assignment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct AffairParams {
    #[validate(required(code = "blank", message = "can't be blank"), length(equal = 6))]
    pub file_number: Option<String>,
    pub client_id: Option<i32>,
    #[validate(required(code = "blank", message = "can't be blank"))]
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    #[validate(required(code = "blank", message = "can't be blank"), length(min = 6, max = 15))]
    pub status: Option<String>,
    #[serde(default)]
    pub assignments_attributes: Vec<AssignmentAttributes>,
}
