//! League service layer.
//!
//! Serves league listings and the standings table, which is computed from finished matches
//! and cached for [`CACHE_TTL`](crate::server::cache::CACHE_TTL).

pub mod standings;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::football::{LeagueDto, MatchDto, StandingsRowDto},
    server::{
        cache::{self, CacheStore},
        data::football::{
            football_match::MatchRepository, league::LeagueRepository, team::TeamRepository,
        },
        error::{football::FootballError, Error},
        model::db::{LeagueModel, MatchModel},
        service::{league::standings::compute_standings, retry::RetryContext},
    },
};

impl From<LeagueModel> for LeagueDto {
    fn from(league: LeagueModel) -> Self {
        Self {
            id: league.id,
            name: league.name,
            country: league.country,
            season: league.season,
        }
    }
}

impl From<MatchModel> for MatchDto {
    fn from(m: MatchModel) -> Self {
        Self {
            id: m.id,
            league_id: m.league_id,
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
            kickoff_at: m.kickoff_at,
            status: m.status,
            home_score: m.home_score,
            away_score: m.away_score,
        }
    }
}

pub struct LeagueService<'a, C: CacheStore> {
    db: &'a DatabaseConnection,
    cache: &'a C,
}

impl<'a, C: CacheStore> LeagueService<'a, C> {
    /// Creates a new instance of LeagueService.
    pub fn new(db: &'a DatabaseConnection, cache: &'a C) -> Self {
        Self { db, cache }
    }

    pub async fn get_leagues(&self) -> Result<Vec<LeagueDto>, Error> {
        let leagues = LeagueRepository::new(self.db).get_all().await?;

        Ok(leagues.into_iter().map(LeagueDto::from).collect())
    }

    /// # Returns
    /// - `Ok(LeagueDto)` - League found
    /// - `Err(Error::FootballError(FootballError::LeagueNotFound))` - No such league
    pub async fn get_league(&self, league_id: i32) -> Result<LeagueDto, Error> {
        let league = LeagueRepository::new(self.db)
            .get(league_id)
            .await?
            .ok_or(FootballError::LeagueNotFound(league_id))?;

        Ok(league.into())
    }

    /// Lists every match of a league in kickoff order, whatever its status.
    pub async fn get_matches(&self, league_id: i32) -> Result<Vec<MatchDto>, Error> {
        LeagueRepository::new(self.db)
            .get(league_id)
            .await?
            .ok_or(FootballError::LeagueNotFound(league_id))?;

        let matches = MatchRepository::new(self.db).get_by_league(league_id).await?;

        Ok(matches.into_iter().map(MatchDto::from).collect())
    }

    /// Gets the league table.
    ///
    /// Returns the cached table when present, otherwise aggregates the league's finished
    /// matches and caches the result. A league without finished matches, or one that does
    /// not exist, yields an empty table.
    ///
    /// # Returns
    /// - `Ok(Vec<StandingsRowDto>)` - Rows ordered by position
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_standings(&self, league_id: i32) -> Result<Vec<StandingsRowDto>, Error> {
        let key = cache::standings_key(league_id);

        if let Some(rows) = cache::get_json::<_, Vec<StandingsRowDto>>(self.cache, &key).await {
            tracing::debug!(league_id = %league_id, "Serving standings from cache");
            return Ok(rows);
        }

        let ctx = RetryContext::new();

        let db = self.db.clone();

        let rows = ctx
            .execute_with_retry(&format!("get standings for league ID {}", league_id), || {
                let db = db.clone();

                Box::pin(async move {
                    let matches = MatchRepository::new(&db)
                        .get_finished_by_league(league_id)
                        .await?;

                    let mut team_ids: Vec<i32> = matches
                        .iter()
                        .flat_map(|m| [m.home_team_id, m.away_team_id])
                        .collect();
                    team_ids.sort_unstable();
                    team_ids.dedup();

                    let team_names = TeamRepository::new(&db)
                        .get_names_by_ids(&team_ids)
                        .await?;

                    Ok(compute_standings(&matches, &team_names))
                })
            })
            .await?;

        cache::set_json(self.cache, &key, &rows).await;

        Ok(rows)
    }
}
