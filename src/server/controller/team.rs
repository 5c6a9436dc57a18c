use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        football::{FormEntryDto, FormQuery, TeamDto},
    },
    server::{error::Error, model::app::AppState, service::team::TeamService},
};

pub static TEAM_TAG: &str = "team";

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db, &state.cache).get_teams().await?;

    Ok((StatusCode::OK, Json(teams)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db, &state.cache)
        .get_team(team_id)
        .await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Get a team's most recent finished matches, most recent first
///
/// # Responses
/// - 200 (OK): Form entries, shorter than `limit` when fewer matches were played
/// - 400 (Bad Request): `limit` outside 1 to 50
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/teams/{id}/form",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID"), FormQuery),
    responses(
        (status = 200, description = "Recent form", body = Vec<FormEntryDto>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_form(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Query(query): Query<FormQuery>,
) -> Result<impl IntoResponse, Error> {
    let form = TeamService::new(&state.db, &state.cache)
        .get_recent_form(team_id, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(form)))
}
