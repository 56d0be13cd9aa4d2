use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attorney")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub dni: String,
    pub full_name: String,
    pub address: Option<String>,
    pub nacionality: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::affair::Entity> for Entity {
    fn to() -> RelationDef {
        super::assignment::Relation::Affair.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::assignment::Relation::Attorney.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
