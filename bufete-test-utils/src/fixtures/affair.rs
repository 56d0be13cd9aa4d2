use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::mock_start_date,
    model::{AffairModel, ClientModel},
    TestContext,
};

impl TestContext {
    pub fn affair(&self) -> AffairFixtures<'_> {
        AffairFixtures { setup: self }
    }
}

pub struct AffairFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AffairFixtures<'a> {
    /// Insert a mock affair owned by `client_id`.
    ///
    /// If an affair with the provided file number already exists, returns the existing
    /// record instead of creating a duplicate. The client must already exist.
    pub async fn insert_mock_affair(
        &self,
        file_number: &str,
        client_id: i32,
    ) -> Result<AffairModel, TestError> {
        if let Some(existing_affair) = entity::prelude::Affair::find()
            .filter(entity::affair::Column::FileNumber.eq(file_number))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_affair);
        }

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Affair::insert(entity::affair::ActiveModel {
                file_number: ActiveValue::Set(file_number.to_string()),
                start_date: ActiveValue::Set(mock_start_date()),
                finish_date: ActiveValue::Set(Some(mock_start_date() + Duration::days(365))),
                status: ActiveValue::Set("unknown".to_string()),
                client_id: ActiveValue::Set(client_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock affair together with the client owning it.
    ///
    /// # Returns
    /// - `Ok((AffairModel, ClientModel))` - The created affair and its client
    pub async fn insert_affair_with_mock_client(
        &self,
        file_number: &str,
        client_dni: &str,
    ) -> Result<(AffairModel, ClientModel), TestError> {
        let client = self.setup.client().insert_mock_client(client_dni).await?;
        let affair = self.insert_mock_affair(file_number, client.id).await?;

        Ok((affair, client))
    }
}
