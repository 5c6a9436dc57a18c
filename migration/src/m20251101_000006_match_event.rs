use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_team::Team, m20251101_000005_football_match::FootballMatch};

static FK_MATCH_EVENT_MATCH_ID: &str = "fk-match_event-match_id";
static FK_MATCH_EVENT_TEAM_ID: &str = "fk-match_event-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchEvent::Id))
                    .col(integer(MatchEvent::MatchId))
                    .col(integer(MatchEvent::TeamId))
                    .col(integer_null(MatchEvent::PlayerId))
                    .col(integer(MatchEvent::Minute))
                    .col(string(MatchEvent::EventType))
                    .col(string_null(MatchEvent::Detail))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_EVENT_MATCH_ID)
                            .from(MatchEvent::Table, MatchEvent::MatchId)
                            .to(FootballMatch::Table, FootballMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_EVENT_TEAM_ID)
                            .from(MatchEvent::Table, MatchEvent::TeamId)
                            .to(Team::Table, Team::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MatchEvent {
    Table,
    Id,
    MatchId,
    TeamId,
    PlayerId,
    Minute,
    EventType,
    Detail,
}
