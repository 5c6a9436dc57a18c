use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_team::Team, m20251101_000003_league::League};

static IDX_MATCH_LEAGUE_STATUS: &str = "idx-football_match-league_id-status";
static IDX_MATCH_HOME_TEAM_ID: &str = "idx-football_match-home_team_id";
static IDX_MATCH_AWAY_TEAM_ID: &str = "idx-football_match-away_team_id";
static FK_MATCH_LEAGUE_ID: &str = "fk-football_match-league_id";
static FK_MATCH_HOME_TEAM_ID: &str = "fk-football_match-home_team_id";
static FK_MATCH_AWAY_TEAM_ID: &str = "fk-football_match-away_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FootballMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(FootballMatch::Id))
                    .col(integer(FootballMatch::LeagueId))
                    .col(integer(FootballMatch::HomeTeamId))
                    .col(integer(FootballMatch::AwayTeamId))
                    .col(timestamp(FootballMatch::KickoffAt))
                    .col(string_len(FootballMatch::Status, 16))
                    .col(integer(FootballMatch::HomeScore).default(0))
                    .col(integer(FootballMatch::AwayScore).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_LEAGUE_ID)
                            .from(FootballMatch::Table, FootballMatch::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_HOME_TEAM_ID)
                            .from(FootballMatch::Table, FootballMatch::HomeTeamId)
                            .to(Team::Table, Team::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_AWAY_TEAM_ID)
                            .from(FootballMatch::Table, FootballMatch::AwayTeamId)
                            .to(Team::Table, Team::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Standings read finished matches per league; form reads by either side.
        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_LEAGUE_STATUS)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::LeagueId)
                    .col(FootballMatch::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_HOME_TEAM_ID)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::HomeTeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_AWAY_TEAM_ID)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::AwayTeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in [
            IDX_MATCH_AWAY_TEAM_ID,
            IDX_MATCH_HOME_TEAM_ID,
            IDX_MATCH_LEAGUE_STATUS,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(index)
                        .table(FootballMatch::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(FootballMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FootballMatch {
    Table,
    Id,
    LeagueId,
    HomeTeamId,
    AwayTeamId,
    KickoffAt,
    Status,
    HomeScore,
    AwayScore,
}
