use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub dni: String,
    pub full_name: String,
    pub address: Option<String>,
    pub nacionality: String,
    pub birthdate: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Allow-listed client attributes accepted on create & update
///
/// Field rules run on attributes whose blank strings were cleared to `None`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct ClientParams {
    #[validate(required(code = "blank", message = "can't be blank"), length(min = 6, max = 12))]
    pub dni: Option<String>,
    #[validate(required(code = "blank", message = "can't be blank"), length(min = 3))]
    pub full_name: Option<String>,
    pub address: Option<String>,
    #[validate(required(code = "blank", message = "can't be blank"), length(min = 3))]
    pub nacionality: Option<String>,
    #[validate(required(code = "blank", message = "can't be blank"))]
    pub birthdate: Option<NaiveDate>,
}
