use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attorney::Table)
                    .if_not_exists()
                    .col(pk_auto(Attorney::Id))
                    .col(string_uniq(Attorney::Dni))
                    .col(string(Attorney::FullName))
                    .col(string_null(Attorney::Address))
                    .col(string(Attorney::Nacionality))
                    .col(timestamp(Attorney::CreatedAt))
                    .col(timestamp(Attorney::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attorney::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Attorney {
    Table,
    Id,
    Dni,
    FullName,
    Address,
    Nacionality,
    CreatedAt,
    UpdatedAt,
}
