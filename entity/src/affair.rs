use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "affair")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub file_number: String,
    pub start_date: Date,
    pub finish_date: Option<Date>,
    pub status: String,
    pub client_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Client,
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::attorney::Entity> for Entity {
    fn to() -> RelationDef {
        super::assignment::Relation::Attorney.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::assignment::Relation::Affair.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
