//! Error types for the Touchline server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, moderation, football data). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod football;
pub mod retry;
pub mod submission;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, football::FootballError,
        submission::SubmissionError,
    },
};

/// Main error type for the Touchline server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (missing session user, admin access)
/// - Submission errors (moderation workflow validation)
/// - Football errors (unknown teams/leagues, invalid query parameters)
/// - External library errors (database, sessions, Redis)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no user in session, admin access required).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Moderation workflow error (unknown submission, already decided, invalid payload).
    #[error(transparent)]
    SubmissionError(#[from] SubmissionError),
    /// Football data error (unknown team or league, invalid form limit).
    #[error(transparent)]
    FootballError(#[from] FootballError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Touchline's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error with Touchline's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis error (cache commands, connection issues).
    #[error(transparent)]
    RedisError(#[from] fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mapping, every other error is treated as an
/// internal server error (500) and logged.
///
/// # Returns
/// - 400 Bad Request - Invalid submission payloads or query parameters
/// - 401 Unauthorized - No authenticated user in session
/// - 403 Forbidden - Admin access required, submission already decided or malformed
/// - 404 Not Found - Missing submissions, teams, leagues or submission targets
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::SubmissionError(err) => err.into_response(),
            Self::FootballError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
