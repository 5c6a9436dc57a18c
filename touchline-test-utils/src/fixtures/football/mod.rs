//! Team, league and match fixture utilities.

pub mod factory;

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn football<'a>(&'a self) -> FootballFixtures<'a> {
        FootballFixtures { setup: self }
    }
}

pub struct FootballFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FootballFixtures<'a> {
    pub async fn insert_team(&self, name: &str) -> Result<entity::team::Model, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            short_name: ActiveValue::Set(None),
            country: ActiveValue::Set("England".to_string()),
            founded: ActiveValue::Set(None),
            stadium: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_league(&self, name: &str) -> Result<entity::league::Model, TestError> {
        Ok(entity::prelude::League::insert(entity::league::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            country: ActiveValue::Set("England".to_string()),
            season: ActiveValue::Set("2025/26".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_player(
        &self,
        name: &str,
        team_id: Option<i32>,
    ) -> Result<entity::player::Model, TestError> {
        Ok(entity::prelude::Player::insert(entity::player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            position: ActiveValue::Set("Forward".to_string()),
            nationality: ActiveValue::Set("England".to_string()),
            date_of_birth: ActiveValue::Set(None),
            team_id: ActiveValue::Set(team_id),
            shirt_number: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a finished match with the provided final score.
    pub async fn insert_finished_match(
        &self,
        league_id: i32,
        home_team_id: i32,
        away_team_id: i32,
        score: (i32, i32),
        kickoff_at: NaiveDateTime,
    ) -> Result<entity::football_match::Model, TestError> {
        self.insert_match(
            league_id,
            home_team_id,
            away_team_id,
            score,
            kickoff_at,
            MatchStatus::Finished,
        )
        .await
    }

    pub async fn insert_match(
        &self,
        league_id: i32,
        home_team_id: i32,
        away_team_id: i32,
        (home_score, away_score): (i32, i32),
        kickoff_at: NaiveDateTime,
        status: MatchStatus,
    ) -> Result<entity::football_match::Model, TestError> {
        Ok(
            entity::prelude::FootballMatch::insert(entity::football_match::ActiveModel {
                league_id: ActiveValue::Set(league_id),
                home_team_id: ActiveValue::Set(home_team_id),
                away_team_id: ActiveValue::Set(away_team_id),
                kickoff_at: ActiveValue::Set(kickoff_at),
                status: ActiveValue::Set(status),
                home_score: ActiveValue::Set(home_score),
                away_score: ActiveValue::Set(away_score),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
