use entity::sea_orm_active_enums::ReviewDecision;

use crate::server::{
    error::{submission::SubmissionError, Error},
    service::submission::SubmissionService,
};

use super::*;

/// Expect the review recorded by a rejection
#[tokio::test]
async fn returns_review_of_decided_submission() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_user("contributor")
        .with_mock_admin("admin")
        .build()
        .await?;
    let submission = test
        .submission()
        .insert_pending(1, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;

    let submission_service = SubmissionService::new(&test.db);
    submission_service
        .reject(submission.id, 2, Some("duplicate".to_string()))
        .await
        .unwrap();
    let review = submission_service.get_review(submission.id).await.unwrap();

    assert_eq!(review.submission_id, submission.id);
    assert_eq!(review.reviewer_id, 2);
    assert_eq!(review.decision, ReviewDecision::Rejected);
    assert_eq!(review.comment.as_deref(), Some("duplicate"));

    Ok(())
}

/// Expect NotReviewed while the submission is pending
#[tokio::test]
async fn fails_for_pending_submission() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_user("contributor")
        .build()
        .await?;
    let submission = test
        .submission()
        .insert_pending(1, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;

    let submission_service = SubmissionService::new(&test.db);
    let result = submission_service.get_review(submission.id).await;

    assert!(matches!(
        result,
        Err(Error::SubmissionError(SubmissionError::NotReviewed(_)))
    ));

    Ok(())
}
