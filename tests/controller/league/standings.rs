use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use touchline::{
    model::football::{LeagueDto, StandingsRowDto},
    server::controller::league::{get_league, get_league_standings},
};

use super::*;

/// Expect 200 with rows ranked by points, goal difference then goals scored
#[tokio::test]
async fn returns_ranked_table() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_mock_team("A")
        .with_mock_team("B")
        .with_mock_team("C")
        .build()
        .await?;
    let league = test.football().insert_league("Premier").await?;
    test.football()
        .insert_finished_match(league.id, 1, 2, (2, 0), factory::kickoff(0))
        .await?;
    test.football()
        .insert_finished_match(league.id, 2, 3, (1, 1), factory::kickoff(7))
        .await?;
    test.football()
        .insert_finished_match(league.id, 3, 1, (0, 3), factory::kickoff(14))
        .await?;

    let result = get_league_standings(State(test.into_app_state()), Path(league.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let table: Vec<StandingsRowDto> = response_json(resp).await;
    let order: Vec<(u32, &str, u32)> = table
        .iter()
        .map(|row| (row.position, row.team_name.as_str(), row.points))
        .collect();
    assert_eq!(order, vec![(1, "A", 6), (2, "B", 1), (3, "C", 1)]);

    Ok(())
}

/// Expect 200 with an empty table for an unknown league
#[tokio::test]
async fn returns_empty_table_for_unknown_league() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = get_league_standings(State(test.into_app_state()), Path(8)).await;

    assert!(result.is_ok());
    let table: Vec<StandingsRowDto> = response_json(result.unwrap().into_response()).await;
    assert!(table.is_empty());

    Ok(())
}

/// Expect 200 for an existing league and 404 otherwise
#[tokio::test]
async fn gets_league_by_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let league = test.football().insert_league("Premier").await?;
    let state = test.into_app_state();

    let result = get_league(State(state.clone()), Path(league.id)).await;
    assert!(result.is_ok());
    let found: LeagueDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(found.season, "2025/26");

    let result = get_league(State(state), Path(league.id + 1)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
