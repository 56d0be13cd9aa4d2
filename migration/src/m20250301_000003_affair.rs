use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_client::Client;

static IDX_AFFAIR_CLIENT_ID: &str = "idx-affair-client_id";
static FK_AFFAIR_CLIENT_ID: &str = "fk-affair-client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Affair::Table)
                    .if_not_exists()
                    .col(pk_auto(Affair::Id))
                    .col(string_len_uniq(Affair::FileNumber, 6))
                    .col(date(Affair::StartDate))
                    .col(date_null(Affair::FinishDate))
                    .col(string_len(Affair::Status, 15))
                    .col(integer(Affair::ClientId))
                    .col(timestamp(Affair::CreatedAt))
                    .col(timestamp(Affair::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AFFAIR_CLIENT_ID)
                    .table(Affair::Table)
                    .col(Affair::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AFFAIR_CLIENT_ID)
                    .from_tbl(Affair::Table)
                    .from_col(Affair::ClientId)
                    .to_tbl(Client::Table)
                    .to_col(Client::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AFFAIR_CLIENT_ID)
                    .table(Affair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AFFAIR_CLIENT_ID)
                    .table(Affair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Affair::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Affair {
    Table,
    Id,
    FileNumber,
    StartDate,
    FinishDate,
    Status,
    ClientId,
    CreatedAt,
    UpdatedAt,
}
