use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(string_uniq(Client::Dni))
                    .col(string(Client::FullName))
                    .col(string_null(Client::Address))
                    .col(string(Client::Nacionality))
                    .col(date(Client::Birthdate))
                    .col(timestamp(Client::CreatedAt))
                    .col(timestamp(Client::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    Dni,
    FullName,
    Address,
    Nacionality,
    Birthdate,
    CreatedAt,
    UpdatedAt,
}
