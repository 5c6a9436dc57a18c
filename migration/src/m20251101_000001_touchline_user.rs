use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TouchlineUser::Table)
                    .if_not_exists()
                    .col(pk_auto(TouchlineUser::Id))
                    .col(string_uniq(TouchlineUser::Username))
                    .col(boolean(TouchlineUser::IsAdmin).default(false))
                    .col(timestamp(TouchlineUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TouchlineUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TouchlineUser {
    Table,
    Id,
    Username,
    IsAdmin,
    CreatedAt,
}
