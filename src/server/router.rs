//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/auth/logout` - Logout current user
/// - `POST /api/submissions` - Propose a change
/// - `GET /api/submissions/pending` - Pending submissions (admin)
/// - `GET /api/submissions/mine` - Caller's own submissions
/// - `GET /api/submissions/{id}` - Single submission (admin)
/// - `GET /api/submissions/{id}/review` - Review of a decided submission (admin)
/// - `PATCH /api/submissions/{id}/approve` - Approve and apply (admin)
/// - `PATCH /api/submissions/{id}/reject` - Reject (admin)
/// - `GET /api/leagues`, `GET /api/leagues/{id}`, `GET /api/leagues/{id}/matches`
/// - `GET /api/leagues/{id}/standings` - League table
/// - `GET /api/teams`, `GET /api/teams/{id}`
/// - `GET /api/teams/{id}/form` - Recent form
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, cache };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Touchline", description = "Touchline API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session user routes"),
        (name = controller::submission::SUBMISSION_TAG, description = "Moderated change submissions"),
        (name = controller::league::LEAGUE_TAG, description = "Leagues, matches and standings"),
        (name = controller::team::TEAM_TAG, description = "Teams and recent form"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::submission::create_submission))
        .routes(routes!(controller::submission::get_pending_submissions))
        .routes(routes!(controller::submission::get_my_submissions))
        .routes(routes!(controller::submission::get_submission))
        .routes(routes!(controller::submission::get_submission_review))
        .routes(routes!(controller::submission::approve_submission))
        .routes(routes!(controller::submission::reject_submission))
        .routes(routes!(controller::league::get_leagues))
        .routes(routes!(controller::league::get_league))
        .routes(routes!(controller::league::get_league_matches))
        .routes(routes!(controller::league::get_league_standings))
        .routes(routes!(controller::team::get_teams))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(controller::team::get_team_form))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
