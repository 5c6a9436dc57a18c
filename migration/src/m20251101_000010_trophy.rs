use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_team::Team;

static FK_TROPHY_WINNER_TEAM_ID: &str = "fk-trophy-winner_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trophy::Table)
                    .if_not_exists()
                    .col(pk_auto(Trophy::Id))
                    .col(string(Trophy::Name))
                    .col(string(Trophy::Season))
                    .col(integer_null(Trophy::WinnerTeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TROPHY_WINNER_TEAM_ID)
                            .from(Trophy::Table, Trophy::WinnerTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trophy::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Trophy {
    Table,
    Id,
    Name,
    Season,
    WinnerTeamId,
}
