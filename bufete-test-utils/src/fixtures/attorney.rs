use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, model::AttorneyModel, TestContext};

impl TestContext {
    pub fn attorney(&self) -> AttorneyFixtures<'_> {
        AttorneyFixtures { setup: self }
    }
}

pub struct AttorneyFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AttorneyFixtures<'a> {
    /// Insert a mock attorney into the database.
    ///
    /// If an attorney with the provided dni already exists, returns the existing record
    /// instead of creating a duplicate.
    pub async fn insert_mock_attorney(&self, dni: &str) -> Result<AttorneyModel, TestError> {
        if let Some(existing_attorney) = entity::prelude::Attorney::find()
            .filter(entity::attorney::Column::Dni.eq(dni))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_attorney);
        }

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Attorney::insert(entity::attorney::ActiveModel {
                dni: ActiveValue::Set(dni.to_string()),
                full_name: ActiveValue::Set("Maria Gomez".to_string()),
                address: ActiveValue::Set(Some("Carrera 7 # 32-16".to_string())),
                nacionality: ActiveValue::Set("Argentina".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
