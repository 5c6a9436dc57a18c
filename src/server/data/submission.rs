use chrono::Utc;
use entity::sea_orm_active_enums::{SubmissionOperation, SubmissionStatus, TargetType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde_json::Value;

pub struct SubmissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubmissionRepository<'a, C> {
    /// Creates a new instance of [`SubmissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pending submission
    pub async fn create(
        &self,
        created_by_id: i32,
        target_type: TargetType,
        operation: SubmissionOperation,
        target_id: Option<i32>,
        changes: Option<Value>,
    ) -> Result<entity::submission::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let submission = entity::submission::ActiveModel {
            created_by_id: ActiveValue::Set(created_by_id),
            target_type: ActiveValue::Set(target_type),
            operation: ActiveValue::Set(operation),
            target_id: ActiveValue::Set(target_id),
            changes: ActiveValue::Set(changes),
            status: ActiveValue::Set(SubmissionStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        submission.insert(self.db).await
    }

    pub async fn get(&self, submission_id: i32) -> Result<Option<entity::submission::Model>, DbErr> {
        entity::prelude::Submission::find_by_id(submission_id)
            .one(self.db)
            .await
    }

    /// Gets all pending submissions, oldest first
    pub async fn get_pending(&self) -> Result<Vec<entity::submission::Model>, DbErr> {
        entity::prelude::Submission::find()
            .filter(entity::submission::Column::Status.eq(SubmissionStatus::Pending))
            .order_by_asc(entity::submission::Column::CreatedAt)
            .order_by_asc(entity::submission::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all submissions made by a user, newest first
    pub async fn get_by_creator(
        &self,
        created_by_id: i32,
    ) -> Result<Vec<entity::submission::Model>, DbErr> {
        entity::prelude::Submission::find()
            .filter(entity::submission::Column::CreatedById.eq(created_by_id))
            .order_by_desc(entity::submission::Column::CreatedAt)
            .order_by_desc(entity::submission::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a submission out of `PENDING` into `status`
    ///
    /// The update only matches a row which is still pending, so of two concurrent decisions
    /// exactly one observes a changed row.
    ///
    /// # Returns
    /// - `Ok(true)` - Submission was pending and now carries `status`
    /// - `Ok(false)` - Submission does not exist or was no longer pending
    pub async fn decide(&self, submission_id: i32, status: SubmissionStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Submission::update_many()
            .set(entity::submission::ActiveModel {
                status: ActiveValue::Set(status),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(entity::submission::Column::Id.eq(submission_id))
            .filter(entity::submission::Column::Status.eq(SubmissionStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
