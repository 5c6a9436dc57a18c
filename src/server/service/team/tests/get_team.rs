use crate::server::{
    error::{football::FootballError, Error},
    service::team::TeamService,
};

use super::*;

/// Expect the team to be returned when it exists
#[tokio::test]
async fn returns_existing_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_team("Rovers").build().await?;

    let cache = memory_cache();
    let team_service = TeamService::new(&test.db, &cache);
    let team = team_service.get_team(1).await.unwrap();

    assert_eq!(team.name, "Rovers");
    assert_eq!(team.country, "England");

    Ok(())
}

/// Expect TeamNotFound for a missing team
#[tokio::test]
async fn fails_for_nonexistent_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let cache = memory_cache();
    let team_service = TeamService::new(&test.db, &cache);
    let result = team_service.get_team(1).await;

    assert!(matches!(
        result,
        Err(Error::FootballError(FootballError::TeamNotFound(1)))
    ));

    Ok(())
}

/// Expect teams to be listed by name
#[tokio::test]
async fn lists_teams_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_team("United")
        .with_mock_team("City")
        .build()
        .await?;

    let cache = memory_cache();
    let team_service = TeamService::new(&test.db, &cache);
    let teams = team_service.get_teams().await.unwrap();

    let names: Vec<&str> = teams.iter().map(|team| team.name.as_str()).collect();
    assert_eq!(names, vec!["City", "United"]);

    Ok(())
}
