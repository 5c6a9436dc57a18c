use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        football::{LeagueDto, MatchDto, StandingsRowDto},
    },
    server::{error::Error, model::app::AppState, service::league::LeagueService},
};

pub static LEAGUE_TAG: &str = "league";

#[utoipa::path(
    get,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "All leagues", body = Vec<LeagueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leagues(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let leagues = LeagueService::new(&state.db, &state.cache)
        .get_leagues()
        .await?;

    Ok((StatusCode::OK, Json(leagues)))
}

#[utoipa::path(
    get,
    path = "/api/leagues/{id}",
    tag = LEAGUE_TAG,
    params(("id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "League", body = LeagueDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let league = LeagueService::new(&state.db, &state.cache)
        .get_league(league_id)
        .await?;

    Ok((StatusCode::OK, Json(league)))
}

/// List a league's matches by kickoff
#[utoipa::path(
    get,
    path = "/api/leagues/{id}/matches",
    tag = LEAGUE_TAG,
    params(("id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Matches of the league", body = Vec<MatchDto>),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league_matches(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let matches = LeagueService::new(&state.db, &state.cache)
        .get_matches(league_id)
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Get the league table computed from finished matches
///
/// # Responses
/// - 200 (OK): Ranked rows, empty for a league without finished matches
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/leagues/{id}/standings",
    tag = LEAGUE_TAG,
    params(("id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "League table", body = Vec<StandingsRowDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league_standings(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let standings = LeagueService::new(&state.db, &state.cache)
        .get_standings(league_id)
        .await?;

    Ok((StatusCode::OK, Json(standings)))
}
