use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::{
    affair::AffairRepository, assignment::AssignmentRepository, attorney::AttorneyRepository,
    client::ClientRepository,
};

/// Deletes a record together with every record depending on it
///
/// Deletes are issued children first so the restricting foreign keys never fire. Pass a
/// transaction as the connection so a failure part way leaves every row untouched.
pub struct CascadeDelete<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CascadeDelete<'a, C> {
    /// Creates a new instance of [`CascadeDelete`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes the client, its affairs and their assignments
    ///
    /// Returns whether the client existed.
    pub async fn client(&self, client_id: i32) -> Result<bool, DbErr> {
        let affair_repo = AffairRepository::new(self.db);
        let assignment_repo = AssignmentRepository::new(self.db);

        let affair_ids = affair_repo.get_ids_by_client_id(client_id).await?;
        let assignments = assignment_repo.delete_by_affair_ids(&affair_ids).await?;
        let affairs = affair_repo.delete_by_client_id(client_id).await?;
        let client = ClientRepository::new(self.db).delete(client_id).await?;

        tracing::debug!(
            client_id = %client_id,
            affairs = %affairs.rows_affected,
            assignments = %assignments,
            "Cascade deleted client"
        );

        Ok(client.rows_affected > 0)
    }

    /// Deletes the attorney and its assignments
    ///
    /// Returns whether the attorney existed.
    pub async fn attorney(&self, attorney_id: i32) -> Result<bool, DbErr> {
        let assignments = AssignmentRepository::new(self.db)
            .delete_by_attorney_id(attorney_id)
            .await?;
        let attorney = AttorneyRepository::new(self.db).delete(attorney_id).await?;

        tracing::debug!(
            attorney_id = %attorney_id,
            assignments = %assignments.rows_affected,
            "Cascade deleted attorney"
        );

        Ok(attorney.rows_affected > 0)
    }

    /// Deletes the affair and its assignments
    ///
    /// Returns whether the affair existed.
    pub async fn affair(&self, affair_id: i32) -> Result<bool, DbErr> {
        let assignments = AssignmentRepository::new(self.db)
            .delete_by_affair_ids(&[affair_id])
            .await?;
        let affair = AffairRepository::new(self.db).delete(affair_id).await?;

        tracing::debug!(
            affair_id = %affair_id,
            assignments = %assignments,
            "Cascade deleted affair"
        );

        Ok(affair.rows_affected > 0)
    }
}
