use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use touchline::{
    model::football::{FormEntryDto, FormQuery, MatchResult},
    server::controller::team::get_team_form,
};

use super::*;

/// Expect 200 with the most recent matches first
#[tokio::test]
async fn returns_recent_form() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_mock_team("Rovers")
        .with_mock_team("United")
        .build()
        .await?;
    let league = test.football().insert_league("Premier").await?;
    test.football()
        .insert_finished_match(league.id, 1, 2, (3, 1), factory::kickoff(0))
        .await?;
    test.football()
        .insert_finished_match(league.id, 2, 1, (2, 2), factory::kickoff(7))
        .await?;

    let result = get_team_form(
        State(test.into_app_state()),
        Path(1),
        Query(FormQuery { limit: Some(5) }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let form: Vec<FormEntryDto> = response_json(resp).await;
    let results: Vec<MatchResult> = form.iter().map(|entry| entry.result).collect();
    assert_eq!(results, vec![MatchResult::Draw, MatchResult::Win]);
    assert_eq!(form[1].opponent_name, "United");

    Ok(())
}

/// Expect 400 for a limit of zero
#[tokio::test]
async fn rejects_zero_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = get_team_form(
        State(test.into_app_state()),
        Path(1),
        Query(FormQuery { limit: Some(0) }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
