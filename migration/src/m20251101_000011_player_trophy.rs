use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000004_player::Player, m20251101_000010_trophy::Trophy};

static FK_PLAYER_TROPHY_PLAYER_ID: &str = "fk-player_trophy-player_id";
static FK_PLAYER_TROPHY_TROPHY_ID: &str = "fk-player_trophy-trophy_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerTrophy::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerTrophy::Id))
                    .col(integer(PlayerTrophy::PlayerId))
                    .col(integer(PlayerTrophy::TrophyId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_TROPHY_PLAYER_ID)
                            .from(PlayerTrophy::Table, PlayerTrophy::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_TROPHY_TROPHY_ID)
                            .from(PlayerTrophy::Table, PlayerTrophy::TrophyId)
                            .to(Trophy::Table, Trophy::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerTrophy::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlayerTrophy {
    Table,
    Id,
    PlayerId,
    TrophyId,
}
