//! Assignment rows submitted inside an affair or attorney form.
//!
//! Each row is classified into an [`AssignmentOp`], then the whole list is validated
//! against the parent's existing assignments as one unit: references must exist and the
//! final set of assignments may link the parent to each counterpart at most once.

use std::collections::{HashMap, HashSet};

use crate::{
    model::assignment::AssignmentAttributes,
    server::{
        error::validation::{FieldError, ValidationErrors},
        validation::rules,
    },
};

/// The record whose form carries the assignment rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedParent {
    Affair,
    Attorney,
}

impl NestedParent {
    /// Field each row supplies; the parent's own key is implied.
    pub fn row_field(self) -> &'static str {
        match self {
            Self::Affair => "attorney_id",
            Self::Attorney => "affair_id",
        }
    }

    fn row_key(self, attributes: &AssignmentAttributes) -> Option<i32> {
        match self {
            Self::Affair => attributes.attorney_id,
            Self::Attorney => attributes.affair_id,
        }
    }

    /// Order `parent_id` and the row's counterpart as `(affair_id, attorney_id)`.
    pub fn pair(self, parent_id: i32, counterpart_id: i32) -> (i32, i32) {
        match self {
            Self::Affair => (parent_id, counterpart_id),
            Self::Attorney => (counterpart_id, parent_id),
        }
    }

    /// The counterpart of an existing assignment row.
    pub fn counterpart(self, assignment: &entity::assignment::Model) -> i32 {
        match self {
            Self::Affair => assignment.attorney_id,
            Self::Attorney => assignment.affair_id,
        }
    }
}

/// What a submitted assignment row asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOp {
    /// Link the parent to a new counterpart
    Create { counterpart_id: Option<i32> },
    /// Re-point an existing assignment of the parent
    Update {
        id: i32,
        counterpart_id: Option<i32>,
    },
    /// Remove an existing assignment of the parent
    Delete { id: i32 },
    /// Blank template row
    Skip,
}

impl AssignmentOp {
    /// ID of the existing assignment targeted by an update or delete.
    pub fn target_id(&self) -> Option<i32> {
        match self {
            Self::Update { id, .. } | Self::Delete { id } => Some(*id),
            Self::Create { .. } | Self::Skip => None,
        }
    }

    /// Counterpart ID referenced by a create or update.
    pub fn counterpart_id(&self) -> Option<i32> {
        match self {
            Self::Create { counterpart_id } | Self::Update { counterpart_id, .. } => *counterpart_id,
            Self::Delete { .. } | Self::Skip => None,
        }
    }
}

/// Classify one submitted row.
///
/// A row without id is skipped when all of its attributes are blank or it is marked
/// `_destroy`. Any other row without id is a create, even when it lacks the counterpart.
pub fn classify(parent: NestedParent, attributes: &AssignmentAttributes) -> AssignmentOp {
    let counterpart_id = parent.row_key(attributes);
    let all_blank = attributes.affair_id.is_none() && attributes.attorney_id.is_none();

    match attributes.id {
        Some(id) if attributes.destroy => AssignmentOp::Delete { id },
        Some(id) => AssignmentOp::Update { id, counterpart_id },
        None if all_blank || attributes.destroy => AssignmentOp::Skip,
        None => AssignmentOp::Create { counterpart_id },
    }
}

/// Classify every submitted row, keeping their order.
pub fn classify_all(
    parent: NestedParent,
    attributes: &[AssignmentAttributes],
) -> Vec<AssignmentOp> {
    attributes
        .iter()
        .map(|attributes| classify(parent, attributes))
        .collect()
}

/// Current assignments of the parent and the counterparts known to exist
#[derive(Debug, Clone, Default)]
pub struct NestedSnapshot {
    /// Existing assignments of the parent as `(assignment id, counterpart id)`
    pub existing: Vec<(i32, i32)>,
    /// Counterpart IDs referenced by the rows which exist in storage
    pub known_counterparts: HashSet<i32>,
}

impl NestedSnapshot {
    /// First update or delete target which is not an assignment of the parent.
    pub fn foreign_target(&self, ops: &[AssignmentOp]) -> Option<i32> {
        ops.iter()
            .filter_map(AssignmentOp::target_id)
            .find(|id| !self.existing.iter().any(|(existing_id, _)| existing_id == id))
    }
}

/// Validated changes to apply to the parent's assignments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedPlan {
    /// Assignment IDs to delete
    pub deletes: Vec<i32>,
    /// `(assignment id, counterpart id)` of assignments to re-point
    pub updates: Vec<(i32, i32)>,
    /// Counterpart IDs to link the parent to
    pub creates: Vec<i32>,
}

impl NestedPlan {
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.updates.is_empty() && self.creates.is_empty()
    }
}

/// Validate the classified rows as a whole.
///
/// Untouched existing assignments keep their counterparts; rows are then applied in order
/// and a row linking a counterpart already linked in the final state is `Taken`. Only the
/// first operation on an assignment ID is honoured. Errors are keyed
/// `assignments[<row index>].<field>`.
///
/// Updates are ordered so an assignment moves onto a counterpart only after the assignment
/// holding it has moved away. Updates that swap counterparts in a cycle keep their
/// submitted order and are rejected by the storage unique index.
pub fn validate_nested(
    parent: NestedParent,
    ops: &[AssignmentOp],
    snapshot: &NestedSnapshot,
) -> Result<NestedPlan, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut plan = NestedPlan::default();

    let targeted: HashSet<i32> = ops.iter().filter_map(AssignmentOp::target_id).collect();
    let mut claimed: HashSet<i32> = snapshot
        .existing
        .iter()
        .filter(|(id, _)| !targeted.contains(id))
        .map(|(_, counterpart_id)| *counterpart_id)
        .collect();
    let mut handled: HashSet<i32> = HashSet::new();

    for (index, op) in ops.iter().enumerate() {
        if let Some(id) = op.target_id() {
            if !handled.insert(id) {
                continue;
            }
        }

        match *op {
            AssignmentOp::Skip => {}
            AssignmentOp::Delete { id } => plan.deletes.push(id),
            AssignmentOp::Create { counterpart_id } | AssignmentOp::Update { counterpart_id, .. } => {
                let mut row_errors = ValidationErrors::new();

                let counterpart_id = rules::reference(
                    &mut row_errors,
                    parent.row_field(),
                    counterpart_id,
                    counterpart_id.is_some_and(|id| snapshot.known_counterparts.contains(&id)),
                );

                if let Some(counterpart_id) = counterpart_id {
                    if claimed.insert(counterpart_id) {
                        match op.target_id() {
                            Some(id) => plan.updates.push((id, counterpart_id)),
                            None => plan.creates.push(counterpart_id),
                        }
                    } else {
                        row_errors.add("affair_id", FieldError::Taken);
                    }
                }

                errors.extend_nested(index, row_errors);
            }
        }
    }

    if errors.is_empty() {
        plan.updates = order_updates(plan.updates, &snapshot.existing);
        Ok(plan)
    } else {
        Err(errors)
    }
}

fn order_updates(mut pending: Vec<(i32, i32)>, existing: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let current: HashMap<i32, i32> = existing.iter().copied().collect();
    let mut ordered = Vec::with_capacity(pending.len());

    while !pending.is_empty() {
        let ready = pending.iter().position(|(id, counterpart_id)| {
            !pending.iter().any(|(other_id, _)| {
                other_id != id && current.get(other_id) == Some(counterpart_id)
            })
        });

        match ready {
            Some(position) => ordered.push(pending.remove(position)),
            None => {
                ordered.append(&mut pending);
            }
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: Option<i32>, attorney_id: Option<i32>, destroy: bool) -> AssignmentAttributes {
        AssignmentAttributes {
            id,
            affair_id: None,
            attorney_id,
            destroy,
        }
    }

    fn snapshot(existing: Vec<(i32, i32)>, known: &[i32]) -> NestedSnapshot {
        NestedSnapshot {
            existing,
            known_counterparts: known.iter().copied().collect(),
        }
    }

    mod parent {
        use bufete_test_utils::prelude::*;

        use super::*;

        #[test]
        fn counterpart_is_the_other_side_of_the_row() {
            let assignment = factory::mock_assignment_model(1, 10, 20);

            assert_eq!(NestedParent::Affair.counterpart(&assignment), 20);
            assert_eq!(NestedParent::Attorney.counterpart(&assignment), 10);
            assert_eq!(NestedParent::Affair.pair(10, 20), (10, 20));
            assert_eq!(NestedParent::Attorney.pair(20, 10), (10, 20));
        }
    }

    mod classify {
        use super::*;

        #[test]
        fn blank_row_is_skipped() {
            let parent = NestedParent::Affair;

            assert_eq!(classify(parent, &row(None, None, false)), AssignmentOp::Skip);
            assert_eq!(classify(parent, &row(None, Some(1), true)), AssignmentOp::Skip);
        }

        /// Expect the parent's own key to be ignored for pairing but to keep the row
        #[test]
        fn parent_key_is_implied() {
            let attributes = AssignmentAttributes {
                affair_id: Some(3),
                ..Default::default()
            };

            assert_eq!(
                classify(NestedParent::Affair, &attributes),
                AssignmentOp::Create {
                    counterpart_id: None
                }
            );
            assert_eq!(
                classify(NestedParent::Attorney, &attributes),
                AssignmentOp::Create {
                    counterpart_id: Some(3)
                }
            );
        }

        #[test]
        fn rows_with_id_update_or_delete() {
            let parent = NestedParent::Affair;

            assert_eq!(
                classify(parent, &row(Some(4), Some(1), false)),
                AssignmentOp::Update {
                    id: 4,
                    counterpart_id: Some(1)
                }
            );
            assert_eq!(
                classify(parent, &row(Some(4), None, true)),
                AssignmentOp::Delete { id: 4 }
            );
        }
    }

    mod validate_nested {
        use super::*;

        /// Expect a blank template row to produce no changes
        #[test]
        fn blank_row_creates_nothing() {
            let ops = classify_all(NestedParent::Affair, &[row(None, None, false)]);

            let plan = validate_nested(NestedParent::Affair, &ops, &NestedSnapshot::default());

            assert_eq!(plan.map(|plan| plan.is_empty()), Ok(true));
        }

        #[test]
        fn creates_distinct_counterparts() {
            let ops = classify_all(
                NestedParent::Affair,
                &[row(None, Some(1), false), row(None, Some(2), false)],
            );

            let plan = validate_nested(NestedParent::Affair, &ops, &snapshot(vec![], &[1, 2]))
                .expect("valid plan");

            assert_eq!(plan.creates, vec![1, 2]);
        }

        /// Expect the second row linking the same counterpart to be taken
        #[test]
        fn rejects_duplicate_rows_in_one_write() {
            let ops = classify_all(
                NestedParent::Affair,
                &[row(None, Some(1), false), row(None, Some(1), false)],
            );

            let errors = validate_nested(NestedParent::Affair, &ops, &snapshot(vec![], &[1]))
                .expect_err("duplicate");

            assert!(errors.get("assignments[0].affair_id").is_empty());
            assert_eq!(errors.get("assignments[1].affair_id"), &[FieldError::Taken]);
        }

        #[test]
        fn rejects_counterpart_already_linked() {
            let ops = classify_all(NestedParent::Affair, &[row(None, Some(1), false)]);

            let errors =
                validate_nested(NestedParent::Affair, &ops, &snapshot(vec![(10, 1)], &[1]))
                    .expect_err("taken");

            assert_eq!(errors.get("assignments[0].affair_id"), &[FieldError::Taken]);
        }

        /// Expect a counterpart freed by a delete in the same write to be linkable again
        #[test]
        fn relinks_counterpart_deleted_in_same_write() {
            let ops = classify_all(
                NestedParent::Affair,
                &[row(Some(10), None, true), row(None, Some(1), false)],
            );

            let plan = validate_nested(NestedParent::Affair, &ops, &snapshot(vec![(10, 1)], &[1]))
                .expect("valid plan");

            assert_eq!(plan.deletes, vec![10]);
            assert_eq!(plan.creates, vec![1]);
        }

        #[test]
        fn update_keeping_counterpart_does_not_collide() {
            let ops = classify_all(NestedParent::Affair, &[row(Some(10), Some(1), false)]);

            let plan = validate_nested(NestedParent::Affair, &ops, &snapshot(vec![(10, 1)], &[1]))
                .expect("valid plan");

            assert_eq!(plan.updates, vec![(10, 1)]);
        }

        #[test]
        fn unknown_counterpart_must_exist() {
            let ops = classify_all(
                NestedParent::Attorney,
                &[AssignmentAttributes {
                    affair_id: Some(99),
                    ..Default::default()
                }],
            );

            let errors = validate_nested(NestedParent::Attorney, &ops, &NestedSnapshot::default())
                .expect_err("missing affair");

            assert_eq!(
                errors.get("assignments[0].affair_id"),
                &[FieldError::MustExist]
            );
        }

        /// Expect a row holding only the parent's key to fail on the missing counterpart
        #[test]
        fn row_without_counterpart_must_exist() {
            let ops = classify_all(
                NestedParent::Affair,
                &[AssignmentAttributes {
                    affair_id: Some(77),
                    ..Default::default()
                }],
            );

            let errors = validate_nested(NestedParent::Affair, &ops, &NestedSnapshot::default())
                .expect_err("missing attorney");

            assert_eq!(
                errors.get("assignments[0].attorney_id"),
                &[FieldError::MustExist]
            );
        }

        #[test]
        fn update_with_blank_counterpart_must_exist() {
            let ops = classify_all(NestedParent::Affair, &[row(Some(10), None, false)]);

            let errors =
                validate_nested(NestedParent::Affair, &ops, &snapshot(vec![(10, 1)], &[]))
                    .expect_err("blank counterpart");

            assert_eq!(
                errors.get("assignments[0].attorney_id"),
                &[FieldError::MustExist]
            );
        }

        /// Expect a chain of moves to run from the free end backwards
        #[test]
        fn orders_chained_updates() {
            let ops = classify_all(
                NestedParent::Affair,
                &[row(Some(10), Some(2), false), row(Some(11), Some(3), false)],
            );

            let plan = validate_nested(
                NestedParent::Affair,
                &ops,
                &snapshot(vec![(10, 1), (11, 2)], &[2, 3]),
            )
            .expect("valid plan");

            assert_eq!(plan.updates, vec![(11, 3), (10, 2)]);
        }

        #[test]
        fn keeps_swapped_updates_in_submitted_order() {
            let ops = classify_all(
                NestedParent::Affair,
                &[row(Some(10), Some(2), false), row(Some(11), Some(1), false)],
            );

            let plan = validate_nested(
                NestedParent::Affair,
                &ops,
                &snapshot(vec![(10, 1), (11, 2)], &[1, 2]),
            )
            .expect("valid plan");

            assert_eq!(plan.updates, vec![(10, 2), (11, 1)]);
        }

        #[test]
        fn finds_foreign_targets() {
            let ops = classify_all(NestedParent::Affair, &[row(Some(11), None, true)]);

            assert_eq!(snapshot(vec![(10, 1)], &[]).foreign_target(&ops), Some(11));
        }
    }
}
