use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use touchline::{
    model::{api::ErrorDto, submission::SubmissionDto},
    server::controller::submission::approve_submission,
};

use super::*;

fn decision(comment: &str) -> Bytes {
    Bytes::from(json!({ "comment": comment }).to_string())
}

/// Expect 200 with the approved submission and the proposed team created
#[tokio::test]
async fn approves_and_applies_change() -> Result<(), TestError> {
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

    let result = approve_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(pending.id),
        decision("looks good"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let submission: SubmissionDto = response_json(resp).await;
    assert_eq!(submission.status, SubmissionStatus::Approved);

    let teams = entity::prelude::Team::find().all(&test.db).await?;
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Harbour FC");

    Ok(())
}

/// Expect 403 when approving a submission a second time
#[tokio::test]
async fn forbids_second_decision() -> Result<(), TestError> {
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

    approve_submission(
        State(state.clone()),
        test.session.clone(),
        Path(pending.id),
        decision("first"),
    )
    .await
    .unwrap();
    let result = approve_submission(
        State(state),
        test.session.clone(),
        Path(pending.id),
        decision("second"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let teams = entity::prelude::Team::find().all(&test.db).await?;
    assert_eq!(teams.len(), 1);

    Ok(())
}

/// Expect 403 and no mutation for a stored update without a target ID
#[tokio::test]
async fn forbids_update_without_target_id() -> Result<(), TestError> {
    let mut test = setup().await?;
    test.football().insert_team("Harbour FC").await?;
    let pending = test
        .submission()
        .insert_pending(
            2,
            TargetType::Team,
            SubmissionOperation::Update,
            None,
            Some(json!({ "name": "Renamed" })),
        )
        .await?;
    login(&test, 1).await;

    let result = approve_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(pending.id),
        decision("ok"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let team = entity::prelude::Team::find_by_id(1).one(&test.db).await?;
    assert_eq!(team.map(|t| t.name), Some("Harbour FC".to_string()));

    Ok(())
}

/// Expect 403 for a regular user
#[tokio::test]
async fn forbids_regular_user() -> Result<(), TestError> {
    let mut test = setup().await?;
    let pending = test
        .submission()
        .insert_pending(2, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;
    login(&test, 2).await;

    let result = approve_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(pending.id),
        decision("self approval"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 when the submission does not exist
#[tokio::test]
async fn returns_not_found_for_missing_submission() -> Result<(), TestError> {
    let test = setup().await?;
    login(&test, 1).await;

    let result = approve_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(42),
        decision("ok"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an empty body to approve without a comment
#[tokio::test]
async fn approves_without_body() -> Result<(), TestError> {
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

    let result = approve_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(pending.id),
        Bytes::new(),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let review = entity::prelude::Review::find().one(&test.db).await?.unwrap();
    assert_eq!(review.comment, None);

    Ok(())
}

/// Expect 400 with an error body for a decision body which is not JSON
#[tokio::test]
async fn rejects_malformed_body() -> Result<(), TestError> {
    let mut test = setup().await?;
    let pending = test
        .submission()
        .insert_pending(2, TargetType::Team, SubmissionOperation::Delete, Some(1), None)
        .await?;
    login(&test, 1).await;

    let result = approve_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Path(pending.id),
        Bytes::from_static(b"{comment"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = response_json(resp).await;
    assert!(error.error.starts_with("Invalid decision body"));

    Ok(())
}
