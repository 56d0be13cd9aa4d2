use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{
        affair::AffairRepository, assignment::AssignmentRepository, attorney::AttorneyRepository,
    },
    validation::nested::{AssignmentOp, NestedParent, NestedPlan, NestedSnapshot},
};

/// Loads and applies the assignment rows of an affair or attorney form
pub struct NestedAssignments<'a, C: ConnectionTrait> {
    db: &'a C,
    parent: NestedParent,
}

impl<'a, C: ConnectionTrait> NestedAssignments<'a, C> {
    /// Creates a new instance of [`NestedAssignments`] for the provided parent record type
    pub fn new(db: &'a C, parent: NestedParent) -> Self {
        Self { db, parent }
    }

    /// Load the parent's current assignments and which referenced counterparts exist
    ///
    /// `parent_id` is `None` while the parent is being created.
    pub async fn snapshot(
        &self,
        parent_id: Option<i32>,
        ops: &[AssignmentOp],
    ) -> Result<NestedSnapshot, DbErr> {
        let assignment_repo = AssignmentRepository::new(self.db);

        let existing = match parent_id {
            Some(parent_id) => {
                let assignments = match self.parent {
                    NestedParent::Affair => assignment_repo.get_by_affair_ids(&[parent_id]).await?,
                    NestedParent::Attorney => {
                        assignment_repo.get_by_attorney_ids(&[parent_id]).await?
                    }
                };

                assignments
                    .iter()
                    .map(|assignment| (assignment.id, self.parent.counterpart(assignment)))
                    .collect()
            }
            None => Vec::new(),
        };

        let mut counterpart_ids: Vec<i32> = ops
            .iter()
            .filter_map(AssignmentOp::counterpart_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        counterpart_ids.sort_unstable();

        let known_counterparts = match self.parent {
            NestedParent::Affair => {
                AttorneyRepository::new(self.db)
                    .find_existing_ids(&counterpart_ids)
                    .await?
            }
            NestedParent::Attorney => {
                AffairRepository::new(self.db)
                    .find_existing_ids(&counterpart_ids)
                    .await?
            }
        };

        Ok(NestedSnapshot {
            existing,
            known_counterparts: known_counterparts.into_iter().collect(),
        })
    }

    /// Apply a validated plan to the parent's assignments
    ///
    /// Deletes run first so a counterpart freed by the write can be linked again.
    pub async fn apply(&self, parent_id: i32, plan: &NestedPlan) -> Result<(), DbErr> {
        let assignment_repo = AssignmentRepository::new(self.db);

        assignment_repo.delete_many(&plan.deletes).await?;

        for (assignment_id, counterpart_id) in &plan.updates {
            let (affair_id, attorney_id) = self.parent.pair(parent_id, *counterpart_id);
            assignment_repo
                .update(*assignment_id, affair_id, attorney_id)
                .await?;
        }

        for counterpart_id in &plan.creates {
            let (affair_id, attorney_id) = self.parent.pair(parent_id, *counterpart_id);
            assignment_repo.create(affair_id, attorney_id).await?;
        }

        Ok(())
    }
}
