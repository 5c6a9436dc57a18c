use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ReviewDecision;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reviewer_id: i32,
    #[sea_orm(unique)]
    pub submission_id: i32,
    pub decision: ReviewDecision,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submission::Entity",
        from = "Column::SubmissionId",
        to = "super::submission::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Submission,
    #[sea_orm(
        belongs_to = "super::touchline_user::Entity",
        from = "Column::ReviewerId",
        to = "super::touchline_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TouchlineUser,
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::touchline_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TouchlineUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
