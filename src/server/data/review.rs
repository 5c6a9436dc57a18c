use chrono::Utc;
use entity::sea_orm_active_enums::ReviewDecision;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a decision on a submission
    ///
    /// Fails if the submission already has a review.
    pub async fn create(
        &self,
        submission_id: i32,
        reviewer_id: i32,
        decision: ReviewDecision,
        comment: Option<String>,
    ) -> Result<entity::review::Model, DbErr> {
        let review = entity::review::ActiveModel {
            submission_id: ActiveValue::Set(submission_id),
            reviewer_id: ActiveValue::Set(reviewer_id),
            decision: ActiveValue::Set(decision),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        review.insert(self.db).await
    }

    pub async fn get_by_submission_id(
        &self,
        submission_id: i32,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::SubmissionId.eq(submission_id))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::{ReviewDecision, SubmissionOperation, TargetType};
    use touchline_test_utils::prelude::*;

    use crate::server::data::review::ReviewRepository;

    /// Expect the review to be retrievable by its submission
    #[tokio::test]
    async fn creates_and_finds_review() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_submission_tables()
            .with_mock_admin("admin")
            .build()
            .await?;
        let submission = test
            .submission()
            .insert_pending(1, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
            .await?;

        let review_repository = ReviewRepository::new(&test.db);
        let created = review_repository
            .create(
                submission.id,
                1,
                ReviewDecision::Rejected,
                Some("duplicate".to_string()),
            )
            .await?;
        let found = review_repository.get_by_submission_id(submission.id).await?;

        assert_eq!(found, Some(created));

        Ok(())
    }

    /// Expect Error when a second review is recorded for the same submission
    #[tokio::test]
    async fn fails_for_second_review() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_submission_tables()
            .with_mock_admin("admin")
            .build()
            .await?;
        let submission = test
            .submission()
            .insert_pending(1, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
            .await?;

        let review_repository = ReviewRepository::new(&test.db);
        review_repository
            .create(submission.id, 1, ReviewDecision::Approved, None)
            .await?;
        let result = review_repository
            .create(submission.id, 1, ReviewDecision::Rejected, None)
            .await;

        assert!(result.is_err());

        Ok(())
    }
}
