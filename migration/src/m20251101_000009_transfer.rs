use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_team::Team, m20251101_000004_player::Player};

static FK_TRANSFER_PLAYER_ID: &str = "fk-transfer-player_id";
static FK_TRANSFER_FROM_TEAM_ID: &str = "fk-transfer-from_team_id";
static FK_TRANSFER_TO_TEAM_ID: &str = "fk-transfer-to_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transfer::Table)
                    .if_not_exists()
                    .col(pk_auto(Transfer::Id))
                    .col(integer(Transfer::PlayerId))
                    .col(integer_null(Transfer::FromTeamId))
                    .col(integer(Transfer::ToTeamId))
                    .col(big_integer_null(Transfer::Fee))
                    .col(date(Transfer::TransferDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFER_PLAYER_ID)
                            .from(Transfer::Table, Transfer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFER_FROM_TEAM_ID)
                            .from(Transfer::Table, Transfer::FromTeamId)
                            .to(Team::Table, Team::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFER_TO_TEAM_ID)
                            .from(Transfer::Table, Transfer::ToTeamId)
                            .to(Team::Table, Team::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transfer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Transfer {
    Table,
    Id,
    PlayerId,
    FromTeamId,
    ToTeamId,
    Fee,
    TransferDate,
}
