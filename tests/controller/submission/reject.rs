use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::ReviewDecision;
use sea_orm::EntityTrait;
use touchline::{
    model::submission::{ReviewDto, SubmissionDto},
    server::controller::submission::{get_submission_review, reject_submission},
};

use super::*;

/// Expect 200 with the rejected submission, a review on record and no entity change
#[tokio::test]
async fn rejects_and_records_review() -> Result<(), TestError> {
    let mut test = setup().await?;
    let pending = test
        .submission()
        .insert_pending(
            2,
            TargetType::Team,
            SubmissionOperation::Create,
            None,
            Some(json!({ "name": "Harbour FC", "country": "England" })),
        )
        .await?;
    login(&test, 1).await;
    let state = test.into_app_state();

    let result = reject_submission(
        State(state.clone()),
        test.session.clone(),
        Path(pending.id),
        Bytes::from(json!({ "comment": "duplicate" }).to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let submission: SubmissionDto = response_json(resp).await;
    assert_eq!(submission.status, SubmissionStatus::Rejected);

    let result =
        get_submission_review(State(state), test.session.clone(), Path(pending.id)).await;

    assert!(result.is_ok());
    let review: ReviewDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(review.decision, ReviewDecision::Rejected);
    assert_eq!(review.reviewer_id, 1);
    assert_eq!(review.comment.as_deref(), Some("duplicate"));

    let teams = entity::prelude::Team::find().all(&test.db).await?;
    assert!(teams.is_empty());

    Ok(())
}

/// Expect 404 for the review of a submission still pending
#[tokio::test]
async fn returns_not_found_for_pending_review() -> Result<(), TestError> {
    let mut test = setup().await?;
    let pending = test
        .submission()
        .insert_pending(2, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;
    login(&test, 1).await;

    let result = get_submission_review(
        State(test.into_app_state()),
        test.session.clone(),
        Path(pending.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an empty body to reject without a comment
#[tokio::test]
async fn rejects_without_body() -> Result<(), TestError> {
    let mut test = setup().await?;
    let pending = test
        .submission()
        .insert_pending(2, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;
    login(&test, 1).await;

    let result = reject_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(pending.id),
        Bytes::new(),
    )
    .await;

    assert!(result.is_ok());
    let submission: SubmissionDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(submission.status, SubmissionStatus::Rejected);

    Ok(())
}
