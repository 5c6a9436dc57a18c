use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_touchline_user::TouchlineUser, m20251101_000013_submission::Submission,
};

static FK_REVIEW_SUBMISSION_ID: &str = "fk-review-submission_id";
static FK_REVIEW_REVIEWER_ID: &str = "fk-review-reviewer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::ReviewerId))
                    .col(integer_uniq(Review::SubmissionId))
                    .col(string_len(Review::Decision, 16))
                    .col(text_null(Review::Comment))
                    .col(timestamp(Review::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_SUBMISSION_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::SubmissionId)
                    .to_tbl(Submission::Table)
                    .to_col(Submission::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_REVIEWER_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::ReviewerId)
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
                    .name(FK_REVIEW_REVIEWER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_SUBMISSION_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    ReviewerId,
    SubmissionId,
    Decision,
    Comment,
    CreatedAt,
}
