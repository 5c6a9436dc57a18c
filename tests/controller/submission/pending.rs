use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use touchline::{
    model::submission::SubmissionDto,
    server::controller::submission::{get_pending_submissions, get_submission},
};

use super::*;

/// Expect 200 with pending submissions oldest first for an administrator
#[tokio::test]
async fn lists_pending_for_admin() -> Result<(), TestError> {
    let mut test = setup().await?;
    let newer = test
        .submission()
        .insert_pending(2, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;
    let older = test
        .submission()
        .insert_pending_aged(
            2,
            TargetType::Team,
            SubmissionOperation::Delete,
            Some(2),
            None,
            chrono::Duration::hours(1),
        )
        .await?;
    login(&test, 1).await;

    let result = get_pending_submissions(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let submissions: Vec<SubmissionDto> = response_json(resp).await;
    let ids: Vec<i32> = submissions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}

/// Expect 403 for a regular user
#[tokio::test]
async fn forbids_regular_user() -> Result<(), TestError> {
    let test = setup().await?;
    login(&test, 2).await;

    let result = get_pending_submissions(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for a submission that does not exist
#[tokio::test]
async fn returns_not_found_for_missing_submission() -> Result<(), TestError> {
    let test = setup().await?;
    login(&test, 1).await;

    let result = get_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(99),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
