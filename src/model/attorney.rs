use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::assignment::{AssignmentAttributes, AssignmentDto};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AttorneyDto {
    pub id: i32,
    pub dni: String,
    pub full_name: String,
    pub address: Option<String>,
    pub nacionality: String,
    pub assignments: Vec<AssignmentDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Allow-listed attorney attributes accepted on create & update
///
/// Also returned by the new & edit form routes, pre-populated with the current
/// values and one row per assignment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct AttorneyParams {
    #[validate(required(code = "blank", message = "can't be blank"), length(min = 6, max = 12))]
    pub dni: Option<String>,
    #[validate(required(code = "blank", message = "can't be blank"), length(min = 3))]
    pub full_name: Option<String>,
    pub address: Option<String>,
    #[validate(required(code = "blank", message = "can't be blank"), length(min = 3))]
    pub nacionality: Option<String>,
    #[serde(default)]
    pub assignments_attributes: Vec<AssignmentAttributes>,
}
