use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_team::Team;

static IDX_PLAYER_TEAM_ID: &str = "idx-player-team_id";
static FK_PLAYER_TEAM_ID: &str = "fk-player-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(string(Player::Position))
                    .col(string(Player::Nationality))
                    .col(date_null(Player::DateOfBirth))
                    .col(integer_null(Player::TeamId))
                    .col(integer_null(Player::ShirtNumber))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_TEAM_ID)
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Position,
    Nationality,
    DateOfBirth,
    TeamId,
    ShirtNumber,
}
