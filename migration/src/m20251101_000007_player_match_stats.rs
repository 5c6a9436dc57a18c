use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000004_player::Player, m20251101_000005_football_match::FootballMatch};

static FK_PLAYER_MATCH_STATS_PLAYER_ID: &str = "fk-player_match_stats-player_id";
static FK_PLAYER_MATCH_STATS_MATCH_ID: &str = "fk-player_match_stats-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerMatchStats::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerMatchStats::Id))
                    .col(integer(PlayerMatchStats::PlayerId))
                    .col(integer(PlayerMatchStats::MatchId))
                    .col(integer(PlayerMatchStats::MinutesPlayed).default(0))
                    .col(integer(PlayerMatchStats::Goals).default(0))
                    .col(integer(PlayerMatchStats::Assists).default(0))
                    .col(integer(PlayerMatchStats::YellowCards).default(0))
                    .col(integer(PlayerMatchStats::RedCards).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_MATCH_STATS_PLAYER_ID)
                            .from(PlayerMatchStats::Table, PlayerMatchStats::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_MATCH_STATS_MATCH_ID)
                            .from(PlayerMatchStats::Table, PlayerMatchStats::MatchId)
                            .to(FootballMatch::Table, FootballMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerMatchStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlayerMatchStats {
    Table,
    Id,
    PlayerId,
    MatchId,
    MinutesPlayed,
    Goals,
    Assists,
    YellowCards,
    RedCards,
}
