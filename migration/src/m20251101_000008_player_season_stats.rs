use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000003_league::League, m20251101_000004_player::Player};

static FK_PLAYER_SEASON_STATS_PLAYER_ID: &str = "fk-player_season_stats-player_id";
static FK_PLAYER_SEASON_STATS_LEAGUE_ID: &str = "fk-player_season_stats-league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSeasonStats::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSeasonStats::Id))
                    .col(integer(PlayerSeasonStats::PlayerId))
                    .col(integer(PlayerSeasonStats::LeagueId))
                    .col(string(PlayerSeasonStats::Season))
                    .col(integer(PlayerSeasonStats::Appearances).default(0))
                    .col(integer(PlayerSeasonStats::Goals).default(0))
                    .col(integer(PlayerSeasonStats::Assists).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_SEASON_STATS_PLAYER_ID)
                            .from(PlayerSeasonStats::Table, PlayerSeasonStats::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_SEASON_STATS_LEAGUE_ID)
                            .from(PlayerSeasonStats::Table, PlayerSeasonStats::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerSeasonStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlayerSeasonStats {
    Table,
    Id,
    PlayerId,
    LeagueId,
    Season,
    Appearances,
    Goals,
    Assists,
}
