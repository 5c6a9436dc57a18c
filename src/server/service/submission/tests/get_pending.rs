use chrono::Duration;

use crate::server::{
    error::{submission::SubmissionError, Error},
    service::submission::SubmissionService,
};

use super::*;

/// Expect pending submissions in creation order regardless of insertion order
#[tokio::test]
async fn lists_pending_oldest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_user("contributor")
        .with_mock_admin("admin")
        .build()
        .await?;
    let t2 = test
        .submission()
        .insert_pending_aged(
            1,
            TargetType::Team,
            SubmissionOperation::Delete,
            Some(2),
            None,
            Duration::minutes(20),
        )
        .await?;
    let t3 = test
        .submission()
        .insert_pending_aged(
            1,
            TargetType::Team,
            SubmissionOperation::Delete,
            Some(3),
            None,
            Duration::minutes(10),
        )
        .await?;
    let t1 = test
        .submission()
        .insert_pending_aged(
            1,
            TargetType::Team,
            SubmissionOperation::Delete,
            Some(1),
            None,
            Duration::minutes(30),
        )
        .await?;

    let submission_service = SubmissionService::new(&test.db);
    let first = submission_service.get_pending().await.unwrap();
    let second = submission_service.get_pending().await.unwrap();

    let ids: Vec<i32> = first.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![t1.id, t2.id, t3.id]);
    assert_eq!(
        ids,
        second.iter().map(|s| s.id).collect::<Vec<i32>>()
    );

    Ok(())
}

/// Expect decided submissions to leave the pending list
#[tokio::test]
async fn excludes_decided_submissions() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_user("contributor")
        .with_mock_admin("admin")
        .build()
        .await?;
    let rejected = test
        .submission()
        .insert_pending(1, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;
    let pending = test
        .submission()
        .insert_pending(1, TargetType::Team, SubmissionOperation::Delete, Some(2), None)
        .await?;

    let submission_service = SubmissionService::new(&test.db);
    submission_service.reject(rejected.id, 2, None).await.unwrap();
    let result = submission_service.get_pending().await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, pending.id);

    Ok(())
}

/// Expect NotFound for a submission which does not exist
#[tokio::test]
async fn get_submission_fails_for_nonexistent_submission() -> Result<(), TestError> {
    let test = TestBuilder::new().with_submission_tables().build().await?;

    let submission_service = SubmissionService::new(&test.db);
    let result = submission_service.get_submission(1).await;

    assert!(matches!(
        result,
        Err(Error::SubmissionError(SubmissionError::NotFound(1)))
    ));

    Ok(())
}
