use sea_orm::entity::prelude::*;

/// Join record between an affair and an attorney.
///
/// The `(affair_id, attorney_id)` pair is unique; the composite index is created by the
/// migration rather than derived from this definition.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub affair_id: i32,
    pub attorney_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::affair::Entity",
        from = "Column::AffairId",
        to = "super::affair::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Affair,
    #[sea_orm(
        belongs_to = "super::attorney::Entity",
        from = "Column::AttorneyId",
        to = "super::attorney::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Attorney,
}

impl Related<super::affair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Affair.def()
    }
}

impl Related<super::attorney::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attorney.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
