use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{error::TestError, fixtures::mock_birthdate, model::ClientModel, TestContext};

impl TestContext {
    pub fn client(&self) -> ClientFixtures<'_> {
        ClientFixtures { setup: self }
    }
}

pub struct ClientFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ClientFixtures<'a> {
    /// Insert a mock client into the database.
    ///
    /// If a client with the provided dni already exists, returns the existing record
    /// instead of creating a duplicate.
    pub async fn insert_mock_client(&self, dni: &str) -> Result<ClientModel, TestError> {
        if let Some(existing_client) = entity::prelude::Client::find()
            .filter(entity::client::Column::Dni.eq(dni))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_client);
        }

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Client::insert(entity::client::ActiveModel {
                dni: ActiveValue::Set(dni.to_string()),
                full_name: ActiveValue::Set("Andres Felipe".to_string()),
                address: ActiveValue::Set(Some("Calle 10 # 5-51".to_string())),
                nacionality: ActiveValue::Set("Colombia".to_string()),
                birthdate: ActiveValue::Set(mock_birthdate()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert `count` mock clients with sequential dni values.
    ///
    /// Numbering continues from the number of clients already present so repeated
    /// calls never collide.
    pub async fn insert_mock_clients(&self, count: usize) -> Result<Vec<ClientModel>, TestError> {
        let offset = entity::prelude::Client::find()
            .count(&self.setup.db)
            .await? as usize;

        let mut clients = Vec::with_capacity(count);
        for n in offset..offset + count {
            let dni = format!("{}", 1_000_000_000 + n);
            clients.push(self.insert_mock_client(&dni).await?);
        }

        Ok(clients)
    }
}
