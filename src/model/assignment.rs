use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub affair_id: i32,
    pub attorney_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Allow-listed assignment attributes accepted on create & update
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AssignmentParams {
    pub affair_id: Option<i32>,
    pub attorney_id: Option<i32>,
}

/// One assignment row of an affair or attorney form
///
/// A row without `id` creates an assignment, a row with `id` updates it, and a row with
/// `id` and `_destroy` deletes it. A row where every attribute is blank is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssignmentAttributes {
    pub id: Option<i32>,
    pub affair_id: Option<i32>,
    pub attorney_id: Option<i32>,
    #[serde(rename = "_destroy", default)]
    pub destroy: bool,
}
