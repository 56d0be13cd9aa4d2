//! Affair service.
//!
//! Affair writes carry the affair's assignment rows and run in one transaction, like
//! attorney writes. An affair must belong to an existing client.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        affair::{AffairDto, AffairParams},
        api::PageDto,
        assignment::{AssignmentAttributes, AssignmentDto},
    },
    server::{
        data::{
            affair::AffairRepository, assignment::AssignmentRepository, client::ClientRepository,
        },
        error::{
            record::NotFoundError,
            validation::{reclassify_unique_violation, UniqueGuard, ValidationErrors},
            Error,
        },
        model::db::{AffairModel, AssignmentModel},
        service::{cascade::CascadeDelete, nested::NestedAssignments},
        validation::{
            affair::{validate_affair, AffairSnapshot},
            nested::{classify_all, validate_nested, NestedParent},
        },
    },
};

static AFFAIR_UNIQUE_GUARDS: &[UniqueGuard] = &[
    UniqueGuard {
        column: "file_number",
        field: "file_number",
    },
    UniqueGuard {
        column: "attorney_id",
        field: "assignments",
    },
];

fn affair_dto(affair: AffairModel, assignments: Vec<AssignmentModel>) -> AffairDto {
    AffairDto {
        id: affair.id,
        file_number: affair.file_number,
        start_date: affair.start_date,
        finish_date: affair.finish_date,
        status: affair.status,
        client_id: affair.client_id,
        assignments: assignments.into_iter().map(AssignmentDto::from).collect(),
        created_at: affair.created_at,
        updated_at: affair.updated_at,
    }
}

/// Service for managing affairs and their assignments.
pub struct AffairService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AffairService<'a> {
    /// Creates a new instance of [`AffairService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of affairs ordered by ID, each with its assignments.
    pub async fn get_page(&self, page: u64) -> Result<PageDto<AffairDto>, Error> {
        let page = AffairRepository::new(self.db).get_page(page).await?;

        let affair_ids: Vec<i32> = page.items.iter().map(|a| a.id).collect();
        let mut assignments: HashMap<i32, Vec<AssignmentModel>> = HashMap::new();
        for assignment in AssignmentRepository::new(self.db)
            .get_by_affair_ids(&affair_ids)
            .await?
        {
            assignments
                .entry(assignment.affair_id)
                .or_default()
                .push(assignment);
        }

        Ok(page.map(|affair| {
            let affair_assignments = assignments.remove(&affair.id).unwrap_or_default();
            affair_dto(affair, affair_assignments)
        }))
    }

    /// Retrieves an affair with its assignments.
    ///
    /// # Returns
    /// - `Ok(AffairDto)` - The affair
    /// - `Err(Error::NotFound)` - No affair has the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, affair_id: i32) -> Result<AffairDto, Error> {
        let affair = AffairRepository::new(self.db)
            .get_by_id(affair_id)
            .await?
            .ok_or(NotFoundError::affair(affair_id))?;
        let assignments = AssignmentRepository::new(self.db)
            .get_by_affair_ids(&[affair_id])
            .await?;

        Ok(affair_dto(affair, assignments))
    }

    /// Blank affair form with one empty assignment row.
    pub fn new_form(&self) -> AffairParams {
        AffairParams {
            assignments_attributes: vec![AssignmentAttributes::default()],
            ..Default::default()
        }
    }

    /// Form pre-populated with the affair's attributes and one row per assignment.
    pub async fn edit_form(&self, affair_id: i32) -> Result<AffairParams, Error> {
        let affair = self.get(affair_id).await?;

        Ok(AffairParams {
            file_number: Some(affair.file_number),
            client_id: Some(affair.client_id),
            start_date: Some(affair.start_date),
            finish_date: affair.finish_date,
            status: Some(affair.status),
            assignments_attributes: affair
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

    /// Creates an affair together with its assignment rows.
    ///
    /// # Returns
    /// - `Ok(AffairDto)` - The persisted affair with its assignments
    /// - `Err(Error::NotFound)` - An assignment row refers to an assignment ID
    /// - `Err(Error::ValidationError)` - The affair or a row is invalid, nothing was persisted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: AffairParams) -> Result<AffairDto, Error> {
        self.write(None, params).await
    }

    /// Overwrites an affair's attributes and applies its assignment rows.
    ///
    /// # Returns
    /// - `Ok(AffairDto)` - The updated affair with its assignments
    /// - `Err(Error::NotFound)` - No affair has the provided ID, or a row refers to an
    ///   assignment of another affair
    /// - `Err(Error::ValidationError)` - The affair or a row is invalid, nothing was persisted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, affair_id: i32, params: AffairParams) -> Result<AffairDto, Error> {
        self.write(Some(affair_id), params).await
    }

    /// Deletes an affair together with its assignments.
    pub async fn delete(&self, affair_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if !CascadeDelete::new(&txn).affair(affair_id).await? {
            return Err(NotFoundError::affair(affair_id).into());
        }

        txn.commit().await?;

        tracing::info!(affair_id = %affair_id, "Deleted affair");

        Ok(())
    }

    async fn write(
        &self,
        affair_id: Option<i32>,
        params: AffairParams,
    ) -> Result<AffairDto, Error> {
        let txn = self.db.begin().await?;
        let affair_repo = AffairRepository::new(&txn);
        let nested = NestedAssignments::new(&txn, NestedParent::Affair);

        if let Some(affair_id) = affair_id {
            if affair_repo.get_by_id(affair_id).await?.is_none() {
                return Err(NotFoundError::affair(affair_id).into());
            }
        }

        let snapshot = AffairSnapshot {
            file_number_holder: match params.file_number.as_deref() {
                Some(file_number) => affair_repo
                    .find_by_file_number(file_number)
                    .await?
                    .map(|a| a.id),
                None => None,
            },
            client_exists: match params.client_id {
                Some(client_id) => ClientRepository::new(&txn)
                    .get_by_id(client_id)
                    .await?
                    .is_some(),
                None => false,
            },
        };
        let ops = classify_all(NestedParent::Affair, &params.assignments_attributes);
        let nested_snapshot = nested.snapshot(affair_id, &ops).await?;

        if let Some(assignment_id) = nested_snapshot.foreign_target(&ops) {
            return Err(NotFoundError::assignment(assignment_id).into());
        }

        let (affair, plan) = ValidationErrors::combine(
            validate_affair(&params, affair_id, &snapshot),
            validate_nested(NestedParent::Affair, &ops, &nested_snapshot),
        )?;

        let affair = match affair_id {
            Some(affair_id) => affair_repo
                .update(affair_id, &affair)
                .await
                .map_err(|e| reclassify_unique_violation(e, AFFAIR_UNIQUE_GUARDS))?
                .ok_or(NotFoundError::affair(affair_id))?,
            None => affair_repo
                .create(&affair)
                .await
                .map_err(|e| reclassify_unique_violation(e, AFFAIR_UNIQUE_GUARDS))?,
        };

        nested
            .apply(affair.id, &plan)
            .await
            .map_err(|e| reclassify_unique_violation(e, AFFAIR_UNIQUE_GUARDS))?;

        let assignments = AssignmentRepository::new(&txn)
            .get_by_affair_ids(&[affair.id])
            .await?;

        txn.commit().await?;

        tracing::info!(
            affair_id = %affair.id,
            file_number = %affair.file_number,
            created = %affair_id.is_none(),
            assignments = %assignments.len(),
            "Saved affair"
        );

        Ok(affair_dto(affair, assignments))
    }
}
