//! Assignment service.
//!
//! Links affairs to attorneys one pair at a time. Both records must exist and each pair
//! may be linked only once.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        assignment::{AssignmentDto, AssignmentParams},
    },
    server::{
        data::{
            affair::AffairRepository, assignment::AssignmentRepository,
            attorney::AttorneyRepository,
        },
        error::{
            record::NotFoundError,
            validation::{reclassify_unique_violation, UniqueGuard},
            Error,
        },
        model::db::AssignmentModel,
        validation::assignment::{validate_assignment, AssignmentSnapshot},
    },
};

static ASSIGNMENT_UNIQUE_GUARDS: &[UniqueGuard] = &[UniqueGuard {
    column: "attorney_id",
    field: "affair_id",
}];

impl From<AssignmentModel> for AssignmentDto {
    fn from(assignment: AssignmentModel) -> Self {
        Self {
            id: assignment.id,
            affair_id: assignment.affair_id,
            attorney_id: assignment.attorney_id,
            created_at: assignment.created_at,
            updated_at: assignment.updated_at,
        }
    }
}

/// Service for managing standalone assignments.
pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    /// Creates a new instance of [`AssignmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of assignments ordered by ID.
    pub async fn get_page(&self, page: u64) -> Result<PageDto<AssignmentDto>, Error> {
        let page = AssignmentRepository::new(self.db).get_page(page).await?;

        Ok(page.map(AssignmentDto::from))
    }

    /// Retrieves an assignment by ID.
    ///
    /// # Returns
    /// - `Ok(AssignmentDto)` - The assignment
    /// - `Err(Error::NotFound)` - No assignment has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, assignment_id: i32) -> Result<AssignmentDto, Error> {
        let assignment = AssignmentRepository::new(self.db)
            .get_by_id(assignment_id)
            .await?
            .ok_or(NotFoundError::assignment(assignment_id))?;

        Ok(assignment.into())
    }

    /// Links an affair to an attorney.
    ///
    /// # Returns
    /// - `Ok(AssignmentDto)` - The persisted assignment
    /// - `Err(Error::ValidationError)` - A reference is missing or the pair is already linked
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: AssignmentParams) -> Result<AssignmentDto, Error> {
        let txn = self.db.begin().await?;

        let snapshot = load_snapshot(&txn, &params).await?;
        let assignment = validate_assignment(&params, None, &snapshot)?;

        let assignment = AssignmentRepository::new(&txn)
            .create(assignment.affair_id, assignment.attorney_id)
            .await
            .map_err(|e| reclassify_unique_violation(e, ASSIGNMENT_UNIQUE_GUARDS))?;

        txn.commit().await?;

        tracing::info!(
            assignment_id = %assignment.id,
            affair_id = %assignment.affair_id,
            attorney_id = %assignment.attorney_id,
            "Created assignment"
        );

        Ok(assignment.into())
    }

    /// Re-points an assignment to another affair or attorney.
    ///
    /// # Returns
    /// - `Ok(AssignmentDto)` - The updated assignment
    /// - `Err(Error::NotFound)` - No assignment has the provided ID
    /// - `Err(Error::ValidationError)` - A reference is missing or the pair is already linked
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        assignment_id: i32,
        params: AssignmentParams,
    ) -> Result<AssignmentDto, Error> {
        let txn = self.db.begin().await?;
        let assignment_repo = AssignmentRepository::new(&txn);

        if assignment_repo.get_by_id(assignment_id).await?.is_none() {
            return Err(NotFoundError::assignment(assignment_id).into());
        }

        let snapshot = load_snapshot(&txn, &params).await?;
        let assignment = validate_assignment(&params, Some(assignment_id), &snapshot)?;

        let assignment = assignment_repo
            .update(assignment_id, assignment.affair_id, assignment.attorney_id)
            .await
            .map_err(|e| reclassify_unique_violation(e, ASSIGNMENT_UNIQUE_GUARDS))?
            .ok_or(NotFoundError::assignment(assignment_id))?;

        txn.commit().await?;

        tracing::info!(assignment_id = %assignment.id, "Updated assignment");

        Ok(assignment.into())
    }

    /// Deletes an assignment.
    ///
    /// # Returns
    /// - `Ok(())` - The assignment was deleted
    /// - `Err(Error::NotFound)` - No assignment has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, assignment_id: i32) -> Result<(), Error> {
        let result = AssignmentRepository::new(self.db)
            .delete(assignment_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(NotFoundError::assignment(assignment_id).into());
        }

        tracing::info!(assignment_id = %assignment_id, "Deleted assignment");

        Ok(())
    }
}

async fn load_snapshot<C: ConnectionTrait>(
    db: &C,
    params: &AssignmentParams,
) -> Result<AssignmentSnapshot, DbErr> {
    let affair_exists = match params.affair_id {
        Some(affair_id) => AffairRepository::new(db)
            .get_by_id(affair_id)
            .await?
            .is_some(),
        None => false,
    };
    let attorney_exists = match params.attorney_id {
        Some(attorney_id) => AttorneyRepository::new(db)
            .get_by_id(attorney_id)
            .await?
            .is_some(),
        None => false,
    };
    let pair_holder = match (params.affair_id, params.attorney_id) {
        (Some(affair_id), Some(attorney_id)) => AssignmentRepository::new(db)
            .find_by_pair(affair_id, attorney_id)
            .await?
            .map(|a| a.id),
        _ => None,
    };

    Ok(AssignmentSnapshot {
        affair_exists,
        attorney_exists,
        pair_holder,
    })
}
