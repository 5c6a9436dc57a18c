use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        submission::{CreateSubmissionDto, DecisionDto, ReviewDto, SubmissionDto},
    },
    server::{
        controller::util::get_user::{get_user_from_session, require_admin},
        error::{submission::SubmissionError, Error},
        model::app::AppState,
        service::submission::SubmissionService,
    },
};

pub static SUBMISSION_TAG: &str = "submission";

/// Decode the optional decision body, an empty body carries no comment
fn decision_from_body(body: &Bytes) -> Result<DecisionDto, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DecisionDto::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        SubmissionError::InvalidSubmission(format!("Invalid decision body: {}", e)).into()
    })
}

/// Propose a change to football data
///
/// The change is stored as a pending submission until an administrator decides it.
///
/// # Responses
/// - 201 (Created): The pending submission
/// - 400 (Bad Request): Malformed request or a payload that does not fit the target type
/// - 401 (Unauthorized): No user in session
#[utoipa::path(
    post,
    path = "/api/submissions",
    tag = SUBMISSION_TAG,
    request_body = CreateSubmissionDto,
    responses(
        (status = 201, description = "Submission created", body = SubmissionDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_submission(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateSubmissionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let Json(request) =
        payload.map_err(|rejection| SubmissionError::InvalidSubmission(rejection.body_text()))?;

    let submission = SubmissionService::new(&state.db)
        .create_submission(user.id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(submission)))
}

/// List pending submissions, oldest first
#[utoipa::path(
    get,
    path = "/api/submissions/pending",
    tag = SUBMISSION_TAG,
    responses(
        (status = 200, description = "Pending submissions", body = Vec<SubmissionDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_submissions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let submissions = SubmissionService::new(&state.db).get_pending().await?;

    Ok((StatusCode::OK, Json(submissions)))
}

/// List the caller's own submissions, newest first
#[utoipa::path(
    get,
    path = "/api/submissions/mine",
    tag = SUBMISSION_TAG,
    responses(
        (status = 200, description = "Submissions created by the caller", body = Vec<SubmissionDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_submissions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let submissions = SubmissionService::new(&state.db)
        .get_by_creator(user.id)
        .await?;

    Ok((StatusCode::OK, Json(submissions)))
}

#[utoipa::path(
    get,
    path = "/api/submissions/{id}",
    tag = SUBMISSION_TAG,
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission", body = SubmissionDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_submission(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let submission = SubmissionService::new(&state.db)
        .get_submission(submission_id)
        .await?;

    Ok((StatusCode::OK, Json(submission)))
}

/// Get the review that decided a submission
#[utoipa::path(
    get,
    path = "/api/submissions/{id}/review",
    tag = SUBMISSION_TAG,
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Review", body = ReviewDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "Submission not found or not yet reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_submission_review(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let review = SubmissionService::new(&state.db)
        .get_review(submission_id)
        .await?;

    Ok((StatusCode::OK, Json(review)))
}

/// Approve a pending submission and apply its change
///
/// # Responses
/// - 200 (OK): The approved submission
/// - 403 (Forbidden): Caller is not an administrator, the submission is already decided or
///   its stored change is malformed
/// - 404 (Not Found): Submission or the entity it targets does not exist
///
/// The body is optional, an empty request approves without a comment.
#[utoipa::path(
    patch,
    path = "/api/submissions/{id}/approve",
    tag = SUBMISSION_TAG,
    params(("id" = i32, Path, description = "Submission ID")),
    request_body(content = DecisionDto, description = "Optional reviewer comment"),
    responses(
        (status = 200, description = "Submission approved", body = SubmissionDto),
        (status = 400, description = "Invalid decision body", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to decide this submission", body = ErrorDto),
        (status = 404, description = "Submission or target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_submission(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let decision = decision_from_body(&body)?;

    let submission = SubmissionService::new(&state.db)
        .approve(submission_id, admin.id, decision.comment)
        .await?;

    Ok((StatusCode::OK, Json(submission)))
}

/// Reject a pending submission without applying it
#[utoipa::path(
    patch,
    path = "/api/submissions/{id}/reject",
    tag = SUBMISSION_TAG,
    params(("id" = i32, Path, description = "Submission ID")),
    request_body(content = DecisionDto, description = "Optional reviewer comment"),
    responses(
        (status = 200, description = "Submission rejected", body = SubmissionDto),
        (status = 400, description = "Invalid decision body", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to decide this submission", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_submission(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let decision = decision_from_body(&body)?;

    let submission = SubmissionService::new(&state.db)
        .reject(submission_id, admin.id, decision.comment)
        .await?;

    Ok((StatusCode::OK, Json(submission)))
}
