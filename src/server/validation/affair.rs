use chrono::NaiveDate;

use crate::{
    model::affair::AffairParams,
    server::{error::validation::ValidationErrors, validation::rules},
};

/// Affair attributes that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAffair {
    pub file_number: String,
    pub start_date: NaiveDate,
    pub finish_date: Option<NaiveDate>,
    pub status: String,
    pub client_id: i32,
}

/// Rows an affair write can collide with or refer to
#[derive(Debug, Clone, Default)]
pub struct AffairSnapshot {
    /// ID of the affair already holding the submitted file number
    pub file_number_holder: Option<i32>,
    /// Whether the submitted client exists
    pub client_exists: bool,
}

/// Validate the affair's own attributes; nested assignments are checked separately.
pub fn validate_affair(
    params: &AffairParams,
    current_id: Option<i32>,
    snapshot: &AffairSnapshot,
) -> Result<ValidAffair, ValidationErrors> {
    let params = AffairParams {
        file_number: rules::optional_string(params.file_number.as_deref()),
        client_id: params.client_id,
        start_date: params.start_date,
        finish_date: params.finish_date,
        status: rules::optional_string(params.status.as_deref()),
        assignments_attributes: Vec::new(),
    };
    let mut errors = ValidationErrors::check(&params);

    if errors.get("file_number").is_empty() {
        rules::unique(
            &mut errors,
            "file_number",
            snapshot.file_number_holder,
            current_id,
        );
    }
    let client_id = rules::reference(
        &mut errors,
        "client_id",
        params.client_id,
        snapshot.client_exists,
    );

    match (params, client_id) {
        (
            AffairParams {
                file_number: Some(file_number),
                start_date: Some(start_date),
                finish_date,
                status: Some(status),
                ..
            },
            Some(client_id),
        ) if errors.is_empty() => Ok(ValidAffair {
            file_number,
            start_date,
            finish_date,
            status,
            client_id,
        }),
        _ => Err(errors),
    }
}
