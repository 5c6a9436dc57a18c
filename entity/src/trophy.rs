use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trophy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub season: String,
    pub winner_team_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::WinnerTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_many = "super::player_trophy::Entity")]
    PlayerTrophy,
}

impl Related<super::player_trophy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerTrophy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
