use crate::{
    model::attorney::AttorneyParams,
    server::{error::validation::ValidationErrors, validation::rules},
};

/// Attorney attributes that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAttorney {
    pub dni: String,
    pub full_name: String,
    pub address: Option<String>,
    pub nacionality: String,
}

/// Rows an attorney write can collide with
#[derive(Debug, Clone, Default)]
pub struct AttorneySnapshot {
    /// ID of the attorney already holding the submitted dni
    pub dni_holder: Option<i32>,
}

/// Validate the attorney's own attributes; nested assignments are checked separately.
pub fn validate_attorney(
    params: &AttorneyParams,
    current_id: Option<i32>,
    snapshot: &AttorneySnapshot,
) -> Result<ValidAttorney, ValidationErrors> {
    let params = AttorneyParams {
        dni: rules::optional_string(params.dni.as_deref()),
        full_name: rules::optional_string(params.full_name.as_deref()),
        address: rules::optional_string(params.address.as_deref()),
        nacionality: rules::optional_string(params.nacionality.as_deref()),
        assignments_attributes: Vec::new(),
    };
    let mut errors = ValidationErrors::check(&params);

    if errors.get("dni").is_empty() {
        rules::unique(&mut errors, "dni", snapshot.dni_holder, current_id);
    }

    match params {
        AttorneyParams {
            dni: Some(dni),
            full_name: Some(full_name),
            address,
            nacionality: Some(nacionality),
            ..
        } if errors.is_empty() => Ok(ValidAttorney {
            dni,
            full_name,
            address,
            nacionality,
        }),
        _ => Err(errors),
    }
}
