use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::{SubmissionStatus, TargetType};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Submission request failed validation before being stored.
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),
    #[error("Submission ID {0} not found")]
    NotFound(i32),
    #[error("Submission ID {0} has not been reviewed")]
    NotReviewed(i32),
    #[error("Submission ID {submission_id} has already been decided as {status}")]
    AlreadyDecided {
        submission_id: i32,
        status: SubmissionStatus,
    },
    /// Stored submission cannot be applied as recorded.
    ///
    /// Validation at creation prevents this for new submissions, but rows written by other
    /// tools or older versions may still carry a missing target ID or an unparseable payload.
    #[error("Submission ID {submission_id} is malformed: {reason}")]
    Malformed { submission_id: i32, reason: String },
    /// Patch is valid on its own but conflicts with the stored record.
    #[error("Submission cannot be applied to {target_type} ID {target_id}: {reason}")]
    Inapplicable {
        target_type: TargetType,
        target_id: i32,
        reason: String,
    },
    #[error("{target_type} ID {target_id} targeted by submission was not found")]
    TargetNotFound {
        target_type: TargetType,
        target_id: i32,
    },
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidSubmission(reason) => error_response(StatusCode::BAD_REQUEST, reason),
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Submission not found"),
            Self::NotReviewed(_) => {
                error_response(StatusCode::NOT_FOUND, "Submission has not been reviewed")
            }
            Self::AlreadyDecided { status, .. } => error_response(
                StatusCode::FORBIDDEN,
                format!("Submission has already been {}", status.to_string().to_lowercase()),
            ),
            Self::Malformed { reason, .. } => error_response(
                StatusCode::FORBIDDEN,
                format!("Submission cannot be applied: {}", reason),
            ),
            Self::Inapplicable { reason, .. } => error_response(
                StatusCode::FORBIDDEN,
                format!("Submission cannot be applied: {}", reason),
            ),
            Self::TargetNotFound { target_type, .. } => error_response(
                StatusCode::NOT_FOUND,
                format!("{} targeted by submission not found", target_type),
            ),
        }
    }
}
