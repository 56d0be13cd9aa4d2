use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub dni: String,
    pub full_name: String,
    pub address: Option<String>,
    pub nacionality: String,
    pub birthdate: Date,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::affair::Entity")]
    Affair,
}

impl Related<super::affair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Affair.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
