use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::MatchStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
    pub country: String,
    pub founded: Option<i32>,
    pub stadium: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub season: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub league_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub kickoff_at: NaiveDateTime,
    pub status: MatchStatus,
    pub home_score: i32,
    pub away_score: i32,
}

/// One team's aggregate over a league's finished matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRowDto {
    /// 1-based rank within the table
    pub position: u32,
    pub team_id: i32,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u32,
}

/// Outcome of a finished match from one team's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormEntryDto {
    pub match_id: i32,
    pub date: NaiveDateTime,
    pub result: MatchResult,
    pub opponent_name: String,
    pub goals_for: i32,
    pub goals_against: i32,
    /// Whether the team played at home
    pub home: bool,
}

#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormQuery {
    /// Number of most recent finished matches, 1 to 50, defaults to 5
    pub limit: Option<u64>,
}
