use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_football_match::FootballMatch;

static FK_ODD_MATCH_ID: &str = "fk-odd-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Odd::Table)
                    .if_not_exists()
                    .col(pk_auto(Odd::Id))
                    .col(integer(Odd::MatchId))
                    .col(string(Odd::Bookmaker))
                    .col(double(Odd::HomeWin))
                    .col(double(Odd::Draw))
                    .col(double(Odd::AwayWin))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ODD_MATCH_ID)
                            .from(Odd::Table, Odd::MatchId)
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
            .drop_table(Table::drop().table(Odd::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Odd {
    Table,
    Id,
    MatchId,
    Bookmaker,
    HomeWin,
    Draw,
    AwayWin,
}
