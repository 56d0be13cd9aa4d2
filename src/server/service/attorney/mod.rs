//! Attorney service.
//!
//! Attorney writes carry the attorney's assignment rows: the attorney and every row are
//! validated together and persisted in one transaction. Deleting an attorney deletes its
//! assignments.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        assignment::{AssignmentAttributes, AssignmentDto},
        attorney::{AttorneyDto, AttorneyParams},
    },
    server::{
        data::{assignment::AssignmentRepository, attorney::AttorneyRepository},
        error::{
            record::NotFoundError,
            validation::{reclassify_unique_violation, UniqueGuard, ValidationErrors},
            Error,
        },
        model::db::{AssignmentModel, AttorneyModel},
        service::{cascade::CascadeDelete, nested::NestedAssignments},
        validation::{
            attorney::{validate_attorney, AttorneySnapshot},
            nested::{classify_all, validate_nested, NestedParent},
        },
    },
};

static ATTORNEY_UNIQUE_GUARDS: &[UniqueGuard] = &[
    UniqueGuard {
        column: "dni",
        field: "dni",
    },
    UniqueGuard {
        column: "attorney_id",
        field: "assignments",
    },
];

fn attorney_dto(attorney: AttorneyModel, assignments: Vec<AssignmentModel>) -> AttorneyDto {
    AttorneyDto {
        id: attorney.id,
        dni: attorney.dni,
        full_name: attorney.full_name,
        address: attorney.address,
        nacionality: attorney.nacionality,
        assignments: assignments.into_iter().map(AssignmentDto::from).collect(),
        created_at: attorney.created_at,
        updated_at: attorney.updated_at,
    }
}

/// Service for managing attorneys and their assignments.
pub struct AttorneyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttorneyService<'a> {
    /// Creates a new instance of [`AttorneyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of attorneys ordered by ID, each with its assignments.
    pub async fn get_page(&self, page: u64) -> Result<PageDto<AttorneyDto>, Error> {
        let page = AttorneyRepository::new(self.db).get_page(page).await?;

        let attorney_ids: Vec<i32> = page.items.iter().map(|a| a.id).collect();
        let mut assignments: HashMap<i32, Vec<AssignmentModel>> = HashMap::new();
        for assignment in AssignmentRepository::new(self.db)
            .get_by_attorney_ids(&attorney_ids)
            .await?
        {
            assignments
                .entry(assignment.attorney_id)
                .or_default()
                .push(assignment);
        }

        Ok(page.map(|attorney| {
            let attorney_assignments = assignments.remove(&attorney.id).unwrap_or_default();
            attorney_dto(attorney, attorney_assignments)
        }))
    }

    /// Retrieves an attorney with its assignments.
    ///
    /// # Returns
    /// - `Ok(AttorneyDto)` - The attorney
    /// - `Err(Error::NotFound)` - No attorney has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, attorney_id: i32) -> Result<AttorneyDto, Error> {
        let attorney = AttorneyRepository::new(self.db)
            .get_by_id(attorney_id)
            .await?
            .ok_or(NotFoundError::attorney(attorney_id))?;
        let assignments = AssignmentRepository::new(self.db)
            .get_by_attorney_ids(&[attorney_id])
            .await?;

        Ok(attorney_dto(attorney, assignments))
    }

    /// Blank attorney form with one empty assignment row.
    pub fn new_form(&self) -> AttorneyParams {
        AttorneyParams {
            assignments_attributes: vec![AssignmentAttributes::default()],
            ..Default::default()
        }
    }

    /// Form pre-populated with the attorney's attributes and one row per assignment.
    ///
    /// # Returns
    /// - `Ok(AttorneyParams)` - The populated form
    /// - `Err(Error::NotFound)` - No attorney has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn edit_form(&self, attorney_id: i32) -> Result<AttorneyParams, Error> {
        let attorney = self.get(attorney_id).await?;

        Ok(AttorneyParams {
            dni: Some(attorney.dni),
            full_name: Some(attorney.full_name),
            address: attorney.address,
            nacionality: Some(attorney.nacionality),
            assignments_attributes: attorney
                .assignments
                .into_iter()
                .map(|a| AssignmentAttributes {
                    id: Some(a.id),
                    affair_id: Some(a.affair_id),
                    attorney_id: Some(a.attorney_id),
                    destroy: false,
                })
                .collect(),
        })
    }

    /// Creates an attorney together with its assignment rows.
    ///
    /// # Returns
    /// - `Ok(AttorneyDto)` - The persisted attorney with its assignments
    /// - `Err(Error::NotFound)` - An assignment row refers to an assignment ID
    /// - `Err(Error::ValidationError)` - The attorney or a row is invalid, nothing was persisted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: AttorneyParams) -> Result<AttorneyDto, Error> {
        self.write(None, params).await
    }

    /// Overwrites an attorney's attributes and applies its assignment rows.
    ///
    /// # Returns
    /// - `Ok(AttorneyDto)` - The updated attorney with its assignments
    /// - `Err(Error::NotFound)` - No attorney has the provided ID, or a row refers to an
    ///   assignment of another attorney
    /// - `Err(Error::ValidationError)` - The attorney or a row is invalid, nothing was persisted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        attorney_id: i32,
        params: AttorneyParams,
    ) -> Result<AttorneyDto, Error> {
        self.write(Some(attorney_id), params).await
    }

    /// Deletes an attorney together with its assignments.
    ///
    /// # Returns
    /// - `Ok(())` - The attorney and its assignments were deleted
    /// - `Err(Error::NotFound)` - No attorney has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, attorney_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if !CascadeDelete::new(&txn).attorney(attorney_id).await? {
            return Err(NotFoundError::attorney(attorney_id).into());
        }

        txn.commit().await?;

        tracing::info!(attorney_id = %attorney_id, "Deleted attorney");

        Ok(())
    }

    async fn write(
        &self,
        attorney_id: Option<i32>,
        params: AttorneyParams,
    ) -> Result<AttorneyDto, Error> {
        let txn = self.db.begin().await?;
        let attorney_repo = AttorneyRepository::new(&txn);
        let nested = NestedAssignments::new(&txn, NestedParent::Attorney);

        if let Some(attorney_id) = attorney_id {
            if attorney_repo.get_by_id(attorney_id).await?.is_none() {
                return Err(NotFoundError::attorney(attorney_id).into());
            }
        }

        let snapshot = AttorneySnapshot {
            dni_holder: match params.dni.as_deref() {
                Some(dni) => attorney_repo.find_by_dni(dni).await?.map(|a| a.id),
                None => None,
            },
        };
        let ops = classify_all(NestedParent::Attorney, &params.assignments_attributes);
        let nested_snapshot = nested.snapshot(attorney_id, &ops).await?;

        if let Some(assignment_id) = nested_snapshot.foreign_target(&ops) {
            return Err(NotFoundError::assignment(assignment_id).into());
        }

        let (attorney, plan) = ValidationErrors::combine(
            validate_attorney(&params, attorney_id, &snapshot),
            validate_nested(NestedParent::Attorney, &ops, &nested_snapshot),
        )?;

        let attorney = match attorney_id {
            Some(attorney_id) => attorney_repo
                .update(attorney_id, &attorney)
                .await
                .map_err(|e| reclassify_unique_violation(e, ATTORNEY_UNIQUE_GUARDS))?
                .ok_or(NotFoundError::attorney(attorney_id))?,
            None => attorney_repo
                .create(&attorney)
                .await
                .map_err(|e| reclassify_unique_violation(e, ATTORNEY_UNIQUE_GUARDS))?,
        };

        nested
            .apply(attorney.id, &plan)
            .await
            .map_err(|e| reclassify_unique_violation(e, ATTORNEY_UNIQUE_GUARDS))?;

        let assignments = AssignmentRepository::new(&txn)
            .get_by_attorney_ids(&[attorney.id])
            .await?;

        txn.commit().await?;

        tracing::info!(
            attorney_id = %attorney.id,
            created = %attorney_id.is_none(),
            deleted_assignments = %plan.deletes.len(),
            updated_assignments = %plan.updates.len(),
            created_assignments = %plan.creates.len(),
            "Saved attorney"
        );

        Ok(attorney_dto(attorney, assignments))
    }
}
