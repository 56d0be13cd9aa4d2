use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::api::PageDto,
    server::{data::page::fetch_page, validation::affair::ValidAffair},
};

pub struct AffairRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AffairRepository<'a, C> {
    /// Creates a new instance of [`AffairRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new affair
    ///
    /// The client must exist due to the foreign key constraint.
    pub async fn create(&self, affair: &ValidAffair) -> Result<entity::affair::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let affair = entity::affair::ActiveModel {
            file_number: ActiveValue::Set(affair.file_number.clone()),
            start_date: ActiveValue::Set(affair.start_date),
            finish_date: ActiveValue::Set(affair.finish_date),
            status: ActiveValue::Set(affair.status.clone()),
            client_id: ActiveValue::Set(affair.client_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        affair.insert(self.db).await
    }

    pub async fn get_by_id(&self, affair_id: i32) -> Result<Option<entity::affair::Model>, DbErr> {
        entity::prelude::Affair::find_by_id(affair_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_file_number(
        &self,
        file_number: &str,
    ) -> Result<Option<entity::affair::Model>, DbErr> {
        entity::prelude::Affair::find()
            .filter(entity::affair::Column::FileNumber.eq(file_number))
            .one(self.db)
            .await
    }

    /// Returns which of the provided affair IDs exist
    pub async fn find_existing_ids(&self, affair_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if affair_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Affair::find()
            .select_only()
            .column(entity::affair::Column::Id)
            .filter(entity::affair::Column::Id.is_in(affair_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// IDs of every affair owned by the client
    pub async fn get_ids_by_client_id(&self, client_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Affair::find()
            .select_only()
            .column(entity::affair::Column::Id)
            .filter(entity::affair::Column::ClientId.eq(client_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Get one page of affairs ordered by ID
    pub async fn get_page(&self, page: u64) -> Result<PageDto<entity::affair::Model>, DbErr> {
        let select = entity::prelude::Affair::find().order_by_asc(entity::affair::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Overwrites every attribute of an affair
    ///
    /// Returns `None` if the affair does not exist.
    pub async fn update(
        &self,
        affair_id: i32,
        affair: &ValidAffair,
    ) -> Result<Option<entity::affair::Model>, DbErr> {
        let existing = match entity::prelude::Affair::find_by_id(affair_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut affair_am = existing.into_active_model();
        affair_am.file_number = ActiveValue::Set(affair.file_number.clone());
        affair_am.start_date = ActiveValue::Set(affair.start_date);
        affair_am.finish_date = ActiveValue::Set(affair.finish_date);
        affair_am.status = ActiveValue::Set(affair.status.clone());
        affair_am.client_id = ActiveValue::Set(affair.client_id);
        affair_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let affair = affair_am.update(self.db).await?;

        Ok(Some(affair))
    }

    /// Deletes an affair
    ///
    /// Returns OK regardless of affair existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, affair_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Affair::delete_by_id(affair_id)
            .exec(self.db)
            .await
    }

    /// Deletes every affair owned by the client
    pub async fn delete_by_client_id(&self, client_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Affair::delete_many()
            .filter(entity::affair::Column::ClientId.eq(client_id))
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Affair::find().count(self.db).await
    }
}
