//! Factory functions for generating in-memory football models.
//!
//! These build model instances without database interaction, suitable for unit tests of
//! pure aggregation logic.

use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::MatchStatus;

/// Kickoff time `day` days after the start of the test season, at 15:00.
pub fn kickoff(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 1)
        .and_then(|date| date.checked_add_days(chrono::Days::new(day as u64)))
        .and_then(|date| date.and_hms_opt(15, 0, 0))
        .expect("valid test kickoff")
}

/// Create a finished match model in league 1.
pub fn mock_finished_match(
    id: i32,
    home_team_id: i32,
    away_team_id: i32,
    (home_score, away_score): (i32, i32),
    kickoff_at: NaiveDateTime,
) -> entity::football_match::Model {
    entity::football_match::Model {
        id,
        league_id: 1,
        home_team_id,
        away_team_id,
        kickoff_at,
        status: MatchStatus::Finished,
        home_score,
        away_score,
    }
}
