use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{SubmissionOperation, SubmissionStatus, TargetType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_by_id: i32,
    pub target_type: TargetType,
    pub operation: SubmissionOperation,
    pub target_id: Option<i32>,
    #[sea_orm(column_type = "Json", nullable)]
    pub changes: Option<Json>,
    pub status: SubmissionStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::touchline_user::Entity",
        from = "Column::CreatedById",
        to = "super::touchline_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TouchlineUser,
    #[sea_orm(has_one = "super::review::Entity")]
    Review,
}

impl Related<super::touchline_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TouchlineUser.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
