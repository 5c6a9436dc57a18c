use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use touchline::{
    model::submission::{CreateSubmissionDto, SubmissionDto},
    server::controller::submission::{create_submission, get_my_submissions},
};

use super::*;

fn new_team_request() -> CreateSubmissionDto {
    CreateSubmissionDto {
        target_type: TargetType::Team,
        operation: SubmissionOperation::Create,
        target_id: None,
        changes: Some(json!({ "name": "Harbour FC", "country": "England" })),
    }
}

/// Expect 201 with a pending submission owned by the caller
#[tokio::test]
async fn creates_pending_submission() -> Result<(), TestError> {
    let test = setup().await?;
    login(&test, 2).await;

    let result = create_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(new_team_request())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let submission: SubmissionDto = response_json(resp).await;
    assert_eq!(submission.created_by_id, 2);
    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert_eq!(submission.target_type, TargetType::Team);

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn requires_session_user() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(new_team_request())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 for an update without a target ID
#[tokio::test]
async fn rejects_update_without_target_id() -> Result<(), TestError> {
    let test = setup().await?;
    login(&test, 2).await;

    let request = CreateSubmissionDto {
        target_type: TargetType::Team,
        operation: SubmissionOperation::Update,
        target_id: None,
        changes: Some(json!({ "name": "Renamed" })),
    };

    let result = create_submission(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(request)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the caller's submissions to be listed newest first
#[tokio::test]
async fn lists_own_submissions() -> Result<(), TestError> {
    let mut test = setup().await?;
    let older = test
        .submission()
        .insert_pending_aged(
            2,
            TargetType::Team,
            SubmissionOperation::Create,
            None,
            Some(json!({ "name": "Old FC", "country": "England" })),
            chrono::Duration::minutes(5),
        )
        .await?;
    let newer = test
        .submission()
        .insert_pending(
            2,
            TargetType::Team,
            SubmissionOperation::Create,
            None,
            Some(json!({ "name": "New FC", "country": "England" })),
        )
        .await?;
    test.submission()
        .insert_pending(
            1,
            TargetType::Team,
            SubmissionOperation::Create,
            None,
            Some(json!({ "name": "Admin FC", "country": "England" })),
        )
        .await?;
    login(&test, 2).await;

    let result = get_my_submissions(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let submissions: Vec<SubmissionDto> = response_json(resp).await;
    let ids: Vec<i32> = submissions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
