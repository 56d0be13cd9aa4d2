use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::api::PageDto, server::data::page::fetch_page};

pub struct AssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    /// Creates a new instance of [`AssignmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links an affair to an attorney
    ///
    /// Both records must exist and the pair must not be linked already.
    pub async fn create(
        &self,
        affair_id: i32,
        attorney_id: i32,
    ) -> Result<entity::assignment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let assignment = entity::assignment::ActiveModel {
            affair_id: ActiveValue::Set(affair_id),
            attorney_id: ActiveValue::Set(attorney_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        assignment_id: i32,
    ) -> Result<Option<entity::assignment::Model>, DbErr> {
        entity::prelude::Assignment::find_by_id(assignment_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_pair(
        &self,
        affair_id: i32,
        attorney_id: i32,
    ) -> Result<Option<entity::assignment::Model>, DbErr> {
        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::AffairId.eq(affair_id))
            .filter(entity::assignment::Column::AttorneyId.eq(attorney_id))
            .one(self.db)
            .await
    }

    /// Assignments of the affairs, ordered by ID
    pub async fn get_by_affair_ids(
        &self,
        affair_ids: &[i32],
    ) -> Result<Vec<entity::assignment::Model>, DbErr> {
        if affair_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::AffairId.is_in(affair_ids.iter().copied()))
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await
    }

    /// Assignments of the attorneys, ordered by ID
    pub async fn get_by_attorney_ids(
        &self,
        attorney_ids: &[i32],
    ) -> Result<Vec<entity::assignment::Model>, DbErr> {
        if attorney_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::AttorneyId.is_in(attorney_ids.iter().copied()))
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await
    }

    /// Get one page of assignments ordered by ID
    pub async fn get_page(&self, page: u64) -> Result<PageDto<entity::assignment::Model>, DbErr> {
        let select =
            entity::prelude::Assignment::find().order_by_asc(entity::assignment::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Re-points an assignment to the provided affair & attorney
    ///
    /// Returns `None` if the assignment does not exist.
    pub async fn update(
        &self,
        assignment_id: i32,
        affair_id: i32,
        attorney_id: i32,
    ) -> Result<Option<entity::assignment::Model>, DbErr> {
        let existing = match entity::prelude::Assignment::find_by_id(assignment_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut assignment_am = existing.into_active_model();
        assignment_am.affair_id = ActiveValue::Set(affair_id);
        assignment_am.attorney_id = ActiveValue::Set(attorney_id);
        assignment_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let assignment = assignment_am.update(self.db).await?;

        Ok(Some(assignment))
    }

    /// Deletes an assignment
    ///
    /// Returns OK regardless of assignment existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, assignment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assignment::delete_by_id(assignment_id)
            .exec(self.db)
            .await
    }

    /// Deletes the assignments with the provided IDs, returning how many rows were deleted
    pub async fn delete_many(&self, assignment_ids: &[i32]) -> Result<u64, DbErr> {
        if assignment_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::Id.is_in(assignment_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every assignment of the affairs, returning how many rows were deleted
    pub async fn delete_by_affair_ids(&self, affair_ids: &[i32]) -> Result<u64, DbErr> {
        if affair_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::AffairId.is_in(affair_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every assignment of the attorney
    pub async fn delete_by_attorney_id(&self, attorney_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::AttorneyId.eq(attorney_id))
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Assignment::find().count(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use bufete_test_utils::prelude::*;

        use crate::server::data::assignment::AssignmentRepository;

        /// Expect the same affair to be linkable to different attorneys
        #[tokio::test]
        async fn links_affair_to_several_attorneys() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_record_tables()
                .with_mock_affair("123abc", "123456")
                .build()
                .await?;
            let affair_model = test.affair().insert_mock_affair("123abc", 1).await?;
            let first = test.attorney().insert_mock_attorney("111111").await?;
            let second = test.attorney().insert_mock_attorney("222222").await?;

            let assignment_repo = AssignmentRepository::new(&test.db);

            assert!(assignment_repo.create(affair_model.id, first.id).await.is_ok());
            assert!(assignment_repo.create(affair_model.id, second.id).await.is_ok());

            Ok(())
        }

        /// Expect the unique pair index to reject a second identical link
        #[tokio::test]
        async fn fails_for_duplicate_pair() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_record_tables()
                .with_mock_affair("123abc", "123456")
                .with_mock_assignment("123abc", "987654")
                .build()
                .await?;
            let affair_model = test.affair().insert_mock_affair("123abc", 1).await?;
            let attorney_model = test.attorney().insert_mock_attorney("987654").await?;

            let assignment_repo = AssignmentRepository::new(&test.db);
            let result = assignment_repo
                .create(affair_model.id, attorney_model.id)
                .await;

            assert!(result.is_err());

            Ok(())
        }

        #[tokio::test]
        async fn fails_for_nonexistent_attorney() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_record_tables()
                .with_mock_affair("123abc", "123456")
                .build()
                .await?;
            let affair_model = test.affair().insert_mock_affair("123abc", 1).await?;

            let assignment_repo = AssignmentRepository::new(&test.db);
            let result = assignment_repo.create(affair_model.id, 99).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_pair {
        use bufete_test_utils::prelude::*;

        use crate::server::data::assignment::AssignmentRepository;

        #[tokio::test]
        async fn finds_existing_pair() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_record_tables()
                .with_mock_affair("123abc", "123456")
                .with_mock_assignment("123abc", "987654")
                .build()
                .await?;
            let affair_model = test.affair().insert_mock_affair("123abc", 1).await?;
            let attorney_model = test.attorney().insert_mock_attorney("987654").await?;

            let assignment_repo = AssignmentRepository::new(&test.db);

            let found = assignment_repo
                .find_by_pair(affair_model.id, attorney_model.id)
                .await?;
            assert!(found.is_some());

            let reversed = assignment_repo
                .find_by_pair(attorney_model.id + 1, affair_model.id)
                .await?;
            assert!(reversed.is_none());

            Ok(())
        }
    }

    mod delete_by_affair_ids {
        use bufete_test_utils::prelude::*;

        use crate::server::data::assignment::AssignmentRepository;

        #[tokio::test]
        async fn deletes_assignments_of_affairs() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_record_tables()
                .with_mock_affair("aaa111", "123456")
                .with_mock_affair("bbb222", "123456")
                .with_mock_assignment("aaa111", "111111")
                .with_mock_assignment("aaa111", "222222")
                .with_mock_assignment("bbb222", "111111")
                .build()
                .await?;
            let affair_model = test.affair().insert_mock_affair("aaa111", 1).await?;

            let assignment_repo = AssignmentRepository::new(&test.db);
            let result = assignment_repo
                .delete_by_affair_ids(&[affair_model.id])
                .await?;

            assert_eq!(result, 2);
            assert_eq!(assignment_repo.count().await?, 1);

            Ok(())
        }

        #[tokio::test]
        async fn skips_query_for_no_affairs() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let assignment_repo = AssignmentRepository::new(&test.db);
            let result = assignment_repo.delete_by_affair_ids(&[]).await?;

            assert_eq!(result, 0);

            Ok(())
        }
    }
}
