//! Team service layer.

pub mod form;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::football::{FormEntryDto, TeamDto},
    server::{
        cache::{self, CacheStore},
        data::football::{football_match::MatchRepository, team::TeamRepository},
        error::{football::FootballError, Error},
        model::db::TeamModel,
        service::{retry::RetryContext, team::form::compute_form},
    },
};

/// Number of matches returned when no form limit is requested.
pub const DEFAULT_FORM_LIMIT: u64 = 5;
/// Largest accepted form limit.
pub const MAX_FORM_LIMIT: u64 = 50;

impl From<TeamModel> for TeamDto {
    fn from(team: TeamModel) -> Self {
        Self {
            id: team.id,
            name: team.name,
            short_name: team.short_name,
            country: team.country,
            founded: team.founded,
            stadium: team.stadium,
        }
    }
}

pub struct TeamService<'a, C: CacheStore> {
    db: &'a DatabaseConnection,
    cache: &'a C,
}

impl<'a, C: CacheStore> TeamService<'a, C> {
    /// Creates a new instance of TeamService.
    pub fn new(db: &'a DatabaseConnection, cache: &'a C) -> Self {
        Self { db, cache }
    }

    pub async fn get_teams(&self) -> Result<Vec<TeamDto>, Error> {
        let teams = TeamRepository::new(self.db).get_all().await?;

        Ok(teams.into_iter().map(TeamDto::from).collect())
    }

    pub async fn get_team(&self, team_id: i32) -> Result<TeamDto, Error> {
        let team = TeamRepository::new(self.db)
            .get(team_id)
            .await?
            .ok_or(FootballError::TeamNotFound(team_id))?;

        Ok(team.into())
    }

    /// Gets a team's most recent finished matches, most recent first.
    ///
    /// Served from cache when present. A team with fewer finished matches than `limit`
    /// yields a shorter list, and an unknown team yields an empty one.
    ///
    /// # Arguments
    /// - `team_id` - ID of the team
    /// - `limit` - Number of matches, defaults to [`DEFAULT_FORM_LIMIT`]
    ///
    /// # Returns
    /// - `Ok(Vec<FormEntryDto>)` - Form entries
    /// - `Err(Error::FootballError(FootballError::InvalidFormLimit))` - `limit` outside
    ///   1 to [`MAX_FORM_LIMIT`]
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_recent_form(
        &self,
        team_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<FormEntryDto>, Error> {
        let limit = limit.unwrap_or(DEFAULT_FORM_LIMIT);
        if !(1..=MAX_FORM_LIMIT).contains(&limit) {
            return Err(FootballError::InvalidFormLimit {
                limit,
                max: MAX_FORM_LIMIT,
            }
            .into());
        }

        let key = cache::form_key(team_id, limit);

        if let Some(entries) = cache::get_json::<_, Vec<FormEntryDto>>(self.cache, &key).await {
            tracing::debug!(team_id = %team_id, limit = %limit, "Serving form from cache");
            return Ok(entries);
        }

        let ctx = RetryContext::new();

        let db = self.db.clone();

        let entries = ctx
            .execute_with_retry(&format!("get form for team ID {}", team_id), || {
                let db = db.clone();

                Box::pin(async move {
                    let matches = MatchRepository::new(&db)
                        .get_recent_finished_by_team(team_id, limit)
                        .await?;

                    let mut opponent_ids: Vec<i32> = matches
                        .iter()
                        .map(|m| {
                            if m.home_team_id == team_id {
                                m.away_team_id
                            } else {
                                m.home_team_id
                            }
                        })
                        .collect();
                    opponent_ids.sort_unstable();
                    opponent_ids.dedup();

                    let team_names = TeamRepository::new(&db)
                        .get_names_by_ids(&opponent_ids)
                        .await?;

                    Ok(compute_form(team_id, &matches, &team_names))
                })
            })
            .await?;

        cache::set_json(self.cache, &key, &entries).await;

        Ok(entries)
    }
}
