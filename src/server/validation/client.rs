use chrono::NaiveDate;

use crate::{
    model::client::ClientParams,
    server::{error::validation::ValidationErrors, validation::rules},
};

/// Client attributes that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidClient {
    pub dni: String,
    pub full_name: String,
    pub address: Option<String>,
    pub nacionality: String,
    pub birthdate: NaiveDate,
}

/// Rows a client write can collide with
#[derive(Debug, Clone, Default)]
pub struct ClientSnapshot {
    /// ID of the client already holding the submitted dni
    pub dni_holder: Option<i32>,
}

/// Validate the attributes of a client being created (`current_id` is `None`) or updated.
pub fn validate_client(
    params: &ClientParams,
    current_id: Option<i32>,
    snapshot: &ClientSnapshot,
) -> Result<ValidClient, ValidationErrors> {
    let params = ClientParams {
        dni: rules::optional_string(params.dni.as_deref()),
        full_name: rules::optional_string(params.full_name.as_deref()),
        address: rules::optional_string(params.address.as_deref()),
        nacionality: rules::optional_string(params.nacionality.as_deref()),
        birthdate: params.birthdate,
    };
    let mut errors = ValidationErrors::check(&params);

    if errors.get("dni").is_empty() {
        rules::unique(&mut errors, "dni", snapshot.dni_holder, current_id);
    }

    match params {
        ClientParams {
            dni: Some(dni),
            full_name: Some(full_name),
            address,
            nacionality: Some(nacionality),
            birthdate: Some(birthdate),
        } if errors.is_empty() => Ok(ValidClient {
            dni,
            full_name,
            address,
            nacionality,
            birthdate,
        }),
        _ => Err(errors),
    }
}
