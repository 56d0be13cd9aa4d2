use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::api::PageDto,
    server::{data::page::fetch_page, validation::attorney::ValidAttorney},
};

pub struct AttorneyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttorneyRepository<'a, C> {
    /// Creates a new instance of [`AttorneyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new attorney
    pub async fn create(&self, attorney: &ValidAttorney) -> Result<entity::attorney::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let attorney = entity::attorney::ActiveModel {
            dni: ActiveValue::Set(attorney.dni.clone()),
            full_name: ActiveValue::Set(attorney.full_name.clone()),
            address: ActiveValue::Set(attorney.address.clone()),
            nacionality: ActiveValue::Set(attorney.nacionality.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        attorney.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        attorney_id: i32,
    ) -> Result<Option<entity::attorney::Model>, DbErr> {
        entity::prelude::Attorney::find_by_id(attorney_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_dni(&self, dni: &str) -> Result<Option<entity::attorney::Model>, DbErr> {
        entity::prelude::Attorney::find()
            .filter(entity::attorney::Column::Dni.eq(dni))
            .one(self.db)
            .await
    }

    /// Returns which of the provided attorney IDs exist
    pub async fn find_existing_ids(&self, attorney_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if attorney_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Attorney::find()
            .select_only()
            .column(entity::attorney::Column::Id)
            .filter(entity::attorney::Column::Id.is_in(attorney_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Get one page of attorneys ordered by ID
    pub async fn get_page(&self, page: u64) -> Result<PageDto<entity::attorney::Model>, DbErr> {
        let select = entity::prelude::Attorney::find().order_by_asc(entity::attorney::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Overwrites every attribute of an attorney
    ///
    /// Returns `None` if the attorney does not exist.
    pub async fn update(
        &self,
        attorney_id: i32,
        attorney: &ValidAttorney,
    ) -> Result<Option<entity::attorney::Model>, DbErr> {
        let existing = match entity::prelude::Attorney::find_by_id(attorney_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut attorney_am = existing.into_active_model();
        attorney_am.dni = ActiveValue::Set(attorney.dni.clone());
        attorney_am.full_name = ActiveValue::Set(attorney.full_name.clone());
        attorney_am.address = ActiveValue::Set(attorney.address.clone());
        attorney_am.nacionality = ActiveValue::Set(attorney.nacionality.clone());
        attorney_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let attorney = attorney_am.update(self.db).await?;

        Ok(Some(attorney))
    }

    /// Deletes an attorney
    ///
    /// Returns OK regardless of attorney existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, attorney_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Attorney::delete_by_id(attorney_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Attorney::find().count(self.db).await
    }
}
