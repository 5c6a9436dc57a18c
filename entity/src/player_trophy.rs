use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_trophy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub trophy_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::trophy::Entity",
        from = "Column::TrophyId",
        to = "super::trophy::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Trophy,
}

impl Related<super::trophy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trophy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
