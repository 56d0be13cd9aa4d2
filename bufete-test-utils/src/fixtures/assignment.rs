use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::AssignmentModel, TestContext};

impl TestContext {
    pub fn assignment(&self) -> AssignmentFixtures<'_> {
        AssignmentFixtures { setup: self }
    }
}

pub struct AssignmentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AssignmentFixtures<'a> {
    /// Insert an assignment linking `affair_id` and `attorney_id`.
    ///
    /// Fails with a database error if either record is missing or the pair already exists.
    pub async fn insert_assignment(
        &self,
        affair_id: i32,
        attorney_id: i32,
    ) -> Result<AssignmentModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Assignment::insert(entity::assignment::ActiveModel {
                affair_id: ActiveValue::Set(affair_id),
                attorney_id: ActiveValue::Set(attorney_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
