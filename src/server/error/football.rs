use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum FootballError {
    #[error("Team ID {0} not found")]
    TeamNotFound(i32),
    #[error("League ID {0} not found")]
    LeagueNotFound(i32),
    #[error("Form limit {limit} is outside of the allowed range 1..={max}")]
    InvalidFormLimit { limit: u64, max: u64 },
}

impl IntoResponse for FootballError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::TeamNotFound(_) => error_response(StatusCode::NOT_FOUND, "Team not found"),
            Self::LeagueNotFound(_) => error_response(StatusCode::NOT_FOUND, "League not found"),
            Self::InvalidFormLimit { .. } => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}
