use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_touchline_user::TouchlineUser;

static IDX_SUBMISSION_STATUS_CREATED_AT: &str = "idx-submission-status-created_at";
static IDX_SUBMISSION_CREATED_BY_ID: &str = "idx-submission-created_by_id";
static FK_SUBMISSION_CREATED_BY_ID: &str = "fk-submission-created_by_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submission::Table)
                    .if_not_exists()
                    .col(pk_auto(Submission::Id))
                    .col(integer(Submission::CreatedById))
                    .col(string_len(Submission::TargetType, 32))
                    .col(string_len(Submission::Operation, 16))
                    .col(integer_null(Submission::TargetId))
                    .col(json_null(Submission::Changes))
                    .col(string_len(Submission::Status, 16))
                    .col(timestamp(Submission::CreatedAt))
                    .col(timestamp(Submission::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Review queue is read by status in creation order
        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBMISSION_STATUS_CREATED_AT)
                    .table(Submission::Table)
                    .col(Submission::Status)
                    .col(Submission::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBMISSION_CREATED_BY_ID)
                    .table(Submission::Table)
                    .col(Submission::CreatedById)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBMISSION_CREATED_BY_ID)
                    .from_tbl(Submission::Table)
                    .from_col(Submission::CreatedById)
                    .to_tbl(TouchlineUser::Table)
                    .to_col(TouchlineUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBMISSION_CREATED_BY_ID)
                    .table(Submission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBMISSION_CREATED_BY_ID)
                    .table(Submission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBMISSION_STATUS_CREATED_AT)
                    .table(Submission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Submission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Submission {
    Table,
    Id,
    CreatedById,
    TargetType,
    Operation,
    TargetId,
    Changes,
    Status,
    CreatedAt,
    UpdatedAt,
}
