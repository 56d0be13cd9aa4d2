use sea_orm::DatabaseConnection;

use crate::{
    model::api::SummaryDto,
    server::{
        data::{
            affair::AffairRepository, assignment::AssignmentRepository,
            attorney::AttorneyRepository, client::ClientRepository,
        },
        error::Error,
    },
};

/// Counts of every record type, shown on the landing page.
pub struct SummaryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SummaryService<'a> {
    /// Creates a new instance of [`SummaryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<SummaryDto, Error> {
        Ok(SummaryDto {
            clients: ClientRepository::new(self.db).count().await?,
            attorneys: AttorneyRepository::new(self.db).count().await?,
            affairs: AffairRepository::new(self.db).count().await?,
            assignments: AssignmentRepository::new(self.db).count().await?,
        })
    }
}
