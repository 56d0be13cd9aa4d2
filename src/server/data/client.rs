use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::api::PageDto,
    server::{data::page::fetch_page, validation::client::ValidClient},
};

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    /// Creates a new instance of [`ClientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new client
    pub async fn create(&self, client: &ValidClient) -> Result<entity::client::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let client = entity::client::ActiveModel {
            dni: ActiveValue::Set(client.dni.clone()),
            full_name: ActiveValue::Set(client.full_name.clone()),
            address: ActiveValue::Set(client.address.clone()),
            nacionality: ActiveValue::Set(client.nacionality.clone()),
            birthdate: ActiveValue::Set(client.birthdate),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        client.insert(self.db).await
    }

    pub async fn get_by_id(&self, client_id: i32) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find_by_id(client_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_dni(&self, dni: &str) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::Dni.eq(dni))
            .one(self.db)
            .await
    }

    /// Get one page of clients ordered by ID
    pub async fn get_page(&self, page: u64) -> Result<PageDto<entity::client::Model>, DbErr> {
        let select = entity::prelude::Client::find().order_by_asc(entity::client::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Overwrites every attribute of a client
    ///
    /// Returns `None` if the client does not exist.
    pub async fn update(
        &self,
        client_id: i32,
        client: &ValidClient,
    ) -> Result<Option<entity::client::Model>, DbErr> {
        let existing = match entity::prelude::Client::find_by_id(client_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut client_am = existing.into_active_model();
        client_am.dni = ActiveValue::Set(client.dni.clone());
        client_am.full_name = ActiveValue::Set(client.full_name.clone());
        client_am.address = ActiveValue::Set(client.address.clone());
        client_am.nacionality = ActiveValue::Set(client.nacionality.clone());
        client_am.birthdate = ActiveValue::Set(client.birthdate);
        client_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let client = client_am.update(self.db).await?;

        Ok(Some(client))
    }

    /// Deletes a client
    ///
    /// Returns OK regardless of client existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field. Fails while affairs still
    /// reference the client.
    pub async fn delete(&self, client_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Client::delete_by_id(client_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Client::find().count(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::server::validation::client::ValidClient;

    fn valid_client(dni: &str) -> ValidClient {
        ValidClient {
            dni: dni.to_string(),
            full_name: "Laura Restrepo".to_string(),
            address: None,
            nacionality: "Colombia".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1970, 3, 12).unwrap(),
        }
    }

    mod create {
        use bufete_test_utils::prelude::*;

        use super::valid_client;
        use crate::server::data::client::ClientRepository;

        /// Expect success when creating a new client
        #[tokio::test]
        async fn creates_client() -> Result<(), TestError> {
            let test = TestBuilder::new().with_record_tables().build().await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.create(&valid_client("123456")).await;

            assert!(result.is_ok());
            let client = result.unwrap();
            assert_eq!(client.dni, "123456");
            assert_eq!(client.created_at, client.updated_at);

            Ok(())
        }

        /// Expect the storage unique index to reject a duplicate dni
        #[tokio::test]
        async fn fails_for_duplicate_dni() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_record_tables()
                .with_mock_client("123456")
                .build()
                .await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.create(&valid_client("123456")).await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.create(&valid_client("123456")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_dni {
        use bufete_test_utils::prelude::*;

        use crate::server::data::client::ClientRepository;

        #[tokio::test]
        async fn finds_existing_client() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_record_tables()
                .with_mock_client("123456")
                .build()
                .await?;

            let client_repo = ClientRepository::new(&test.db);

            assert!(matches!(client_repo.find_by_dni("123456").await, Ok(Some(_))));
            assert!(matches!(client_repo.find_by_dni("654321").await, Ok(None)));

            Ok(())
        }
    }

    mod get_page {
        use bufete_test_utils::prelude::*;

        use crate::server::data::client::ClientRepository;

        /// Expect pages of 10 ordered by ID, with an empty page past the end
        #[tokio::test]
        async fn pages_through_25_clients() -> Result<(), TestError> {
            let test = TestBuilder::new().with_record_tables().build().await?;
            let clients = test.client().insert_mock_clients(25).await?;

            let client_repo = ClientRepository::new(&test.db);

            let first = client_repo.get_page(1).await?;
            let ids: Vec<i32> = first.items.iter().map(|c| c.id).collect();
            let expected: Vec<i32> = clients[0..10].iter().map(|c| c.id).collect();
            assert_eq!(ids, expected);
            assert_eq!(first.total_items, 25);
            assert_eq!(first.total_pages, 3);

            let third = client_repo.get_page(3).await?;
            let ids: Vec<i32> = third.items.iter().map(|c| c.id).collect();
            let expected: Vec<i32> = clients[20..25].iter().map(|c| c.id).collect();
            assert_eq!(ids, expected);

            let fourth = client_repo.get_page(4).await?;
            assert!(fourth.items.is_empty());
            assert_eq!(fourth.page, 4);
            assert_eq!(fourth.total_items, 25);

            Ok(())
        }
    }

    mod update {
        use bufete_test_utils::prelude::*;

        use super::valid_client;
        use crate::server::data::client::ClientRepository;

        #[tokio::test]
        async fn updates_existing_client() -> Result<(), TestError> {
            let test = TestBuilder::new().with_record_tables().build().await?;
            let client_model = test.client().insert_mock_client("123456").await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo
                .update(client_model.id, &valid_client("654321"))
                .await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.dni, "654321");
            assert_eq!(updated.full_name, "Laura Restrepo");

            Ok(())
        }

        #[tokio::test]
        async fn returns_none_for_nonexistent_client() -> Result<(), TestError> {
            let test = TestBuilder::new().with_record_tables().build().await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.update(1, &valid_client("654321")).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use bufete_test_utils::prelude::*;

        use crate::server::data::client::ClientRepository;

        #[tokio::test]
        async fn deletes_existing_client() -> Result<(), TestError> {
            let test = TestBuilder::new().with_record_tables().build().await?;
            let client_model = test.client().insert_mock_client("123456").await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.delete(client_model.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);
            assert_eq!(client_repo.count().await?, 0);

            Ok(())
        }

        /// Expect the foreign key to reject deleting a client that still has affairs
        #[tokio::test]
        async fn fails_while_affairs_reference_client() -> Result<(), TestError> {
            let test = TestBuilder::new().with_record_tables().build().await?;
            let (_, client_model) = test
                .affair()
                .insert_affair_with_mock_client("123abc", "123456")
                .await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.delete(client_model.id).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
