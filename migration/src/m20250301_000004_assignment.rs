use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250301_000002_attorney::Attorney, m20250301_000003_affair::Affair};

static IDX_ASSIGNMENT_AFFAIR_ID: &str = "idx-assignment-affair_id";
static IDX_ASSIGNMENT_ATTORNEY_ID: &str = "idx-assignment-attorney_id";
static IDX_ASSIGNMENT_AFFAIR_ID_ATTORNEY_ID: &str = "idx-assignment-affair_id-attorney_id";
static FK_ASSIGNMENT_AFFAIR_ID: &str = "fk-assignment-affair_id";
static FK_ASSIGNMENT_ATTORNEY_ID: &str = "fk-assignment-attorney_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignment::Id))
                    .col(integer(Assignment::AffairId))
                    .col(integer(Assignment::AttorneyId))
                    .col(timestamp(Assignment::CreatedAt))
                    .col(timestamp(Assignment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_AFFAIR_ID)
                    .table(Assignment::Table)
                    .col(Assignment::AffairId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_ATTORNEY_ID)
                    .table(Assignment::Table)
                    .col(Assignment::AttorneyId)
                    .to_owned(),
            )
            .await?;

        // Backs the application-level pair uniqueness check; the check alone races.
        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_AFFAIR_ID_ATTORNEY_ID)
                    .table(Assignment::Table)
                    .col(Assignment::AffairId)
                    .col(Assignment::AttorneyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSIGNMENT_AFFAIR_ID)
                    .from_tbl(Assignment::Table)
                    .from_col(Assignment::AffairId)
                    .to_tbl(Affair::Table)
                    .to_col(Affair::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSIGNMENT_ATTORNEY_ID)
                    .from_tbl(Assignment::Table)
                    .from_col(Assignment::AttorneyId)
                    .to_tbl(Attorney::Table)
                    .to_col(Attorney::Id)
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
                    .name(FK_ASSIGNMENT_ATTORNEY_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ASSIGNMENT_AFFAIR_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        for index in [
            IDX_ASSIGNMENT_AFFAIR_ID_ATTORNEY_ID,
            IDX_ASSIGNMENT_ATTORNEY_ID,
            IDX_ASSIGNMENT_AFFAIR_ID,
        ] {
            manager
                .drop_index(Index::drop().name(index).table(Assignment::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assignment {
    Table,
    Id,
    AffairId,
    AttorneyId,
    CreatedAt,
    UpdatedAt,
}
