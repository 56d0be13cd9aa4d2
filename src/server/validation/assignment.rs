use crate::{
    model::assignment::AssignmentParams,
    server::{error::validation::ValidationErrors, validation::rules},
};

/// Assignment attributes that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidAssignment {
    pub affair_id: i32,
    pub attorney_id: i32,
}

/// Rows an assignment write can collide with or refer to
#[derive(Debug, Clone, Default)]
pub struct AssignmentSnapshot {
    pub affair_exists: bool,
    pub attorney_exists: bool,
    /// ID of the assignment already linking the submitted affair & attorney
    pub pair_holder: Option<i32>,
}

/// Validate a standalone assignment write.
///
/// A duplicate pair is reported against `affair_id`.
pub fn validate_assignment(
    params: &AssignmentParams,
    current_id: Option<i32>,
    snapshot: &AssignmentSnapshot,
) -> Result<ValidAssignment, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let affair_id = rules::reference(
        &mut errors,
        "affair_id",
        params.affair_id,
        snapshot.affair_exists,
    );
    let attorney_id = rules::reference(
        &mut errors,
        "attorney_id",
        params.attorney_id,
        snapshot.attorney_exists,
    );

    match (affair_id, attorney_id) {
        (Some(affair_id), Some(attorney_id))
            if rules::unique(&mut errors, "affair_id", snapshot.pair_holder, current_id) =>
        {
            Ok(ValidAssignment {
                affair_id,
                attorney_id,
            })
        }
        _ => Err(errors),
    }
}
