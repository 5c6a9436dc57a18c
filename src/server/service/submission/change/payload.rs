//! Field payloads accepted for each target type.
//!
//! `New*` payloads describe a complete record for CREATE. `*Patch` payloads list the fields
//! an UPDATE overwrites; absent or `null` fields keep their stored value. Unknown fields are
//! rejected so a typo never silently becomes a no-op.

use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{ActiveValue, EntityTrait};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Typed change payload for one kind of canonical entity.
pub trait ChangePayload: DeserializeOwned {
    type Entity: EntityTrait;

    /// Check value constraints the JSON shape alone cannot express.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Write the payload's fields onto an active model.
    fn write_to(self, active_model: &mut <Self::Entity as EntityTrait>::ActiveModel);

    /// Check constraints spanning stored and patched fields once the payload is written.
    fn check_merged(
        _active_model: &<Self::Entity as EntityTrait>::ActiveModel,
    ) -> Result<(), String> {
        Ok(())
    }
}

fn current<V: Into<sea_orm::Value>>(slot: &ActiveValue<V>) -> Option<&V> {
    match slot {
        ActiveValue::Set(value) | ActiveValue::Unchanged(value) => Some(value),
        ActiveValue::NotSet => None,
    }
}

fn set_if<V: Into<sea_orm::Value>>(slot: &mut ActiveValue<V>, value: Option<V>) {
    if let Some(value) = value {
        *slot = ActiveValue::Set(value);
    }
}

fn non_blank(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be blank", field));
    }

    Ok(())
}

fn non_negative(field: &str, value: i32) -> Result<(), String> {
    if value < 0 {
        return Err(format!("{} must not be negative", field));
    }

    Ok(())
}

fn check<T>(value: &Option<T>, rule: impl FnOnce(&T) -> Result<(), String>) -> Result<(), String> {
    value.as_ref().map_or(Ok(()), rule)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTeam {
    pub name: String,
    pub short_name: Option<String>,
    pub country: String,
    pub founded: Option<i32>,
    pub stadium: Option<String>,
}

impl ChangePayload for NewTeam {
    type Entity = entity::team::Entity;

    fn validate(&self) -> Result<(), String> {
        non_blank("name", &self.name)?;
        non_blank("country", &self.country)
    }

    fn write_to(self, am: &mut entity::team::ActiveModel) {
        am.name = ActiveValue::Set(self.name);
        am.short_name = ActiveValue::Set(self.short_name);
        am.country = ActiveValue::Set(self.country);
        am.founded = ActiveValue::Set(self.founded);
        am.stadium = ActiveValue::Set(self.stadium);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub country: Option<String>,
    pub founded: Option<i32>,
    pub stadium: Option<String>,
}

impl ChangePayload for TeamPatch {
    type Entity = entity::team::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.name, |v| non_blank("name", v))?;
        check(&self.country, |v| non_blank("country", v))
    }

    fn write_to(self, am: &mut entity::team::ActiveModel) {
        set_if(&mut am.name, self.name);
        set_if(&mut am.short_name, self.short_name.map(Some));
        set_if(&mut am.country, self.country);
        set_if(&mut am.founded, self.founded.map(Some));
        set_if(&mut am.stadium, self.stadium.map(Some));
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub team_id: Option<i32>,
    pub shirt_number: Option<i32>,
}

impl ChangePayload for NewPlayer {
    type Entity = entity::player::Entity;

    fn validate(&self) -> Result<(), String> {
        non_blank("name", &self.name)?;
        non_blank("position", &self.position)?;
        non_blank("nationality", &self.nationality)?;
        check(&self.shirt_number, |v| non_negative("shirtNumber", *v))
    }

    fn write_to(self, am: &mut entity::player::ActiveModel) {
        am.name = ActiveValue::Set(self.name);
        am.position = ActiveValue::Set(self.position);
        am.nationality = ActiveValue::Set(self.nationality);
        am.date_of_birth = ActiveValue::Set(self.date_of_birth);
        am.team_id = ActiveValue::Set(self.team_id);
        am.shirt_number = ActiveValue::Set(self.shirt_number);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub team_id: Option<i32>,
    pub shirt_number: Option<i32>,
}

impl ChangePayload for PlayerPatch {
    type Entity = entity::player::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.name, |v| non_blank("name", v))?;
        check(&self.position, |v| non_blank("position", v))?;
        check(&self.nationality, |v| non_blank("nationality", v))?;
        check(&self.shirt_number, |v| non_negative("shirtNumber", *v))
    }

    fn write_to(self, am: &mut entity::player::ActiveModel) {
        set_if(&mut am.name, self.name);
        set_if(&mut am.position, self.position);
        set_if(&mut am.nationality, self.nationality);
        set_if(&mut am.date_of_birth, self.date_of_birth.map(Some));
        set_if(&mut am.team_id, self.team_id.map(Some));
        set_if(&mut am.shirt_number, self.shirt_number.map(Some));
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewLeague {
    pub name: String,
    pub country: String,
    pub season: String,
}

impl ChangePayload for NewLeague {
    type Entity = entity::league::Entity;

    fn validate(&self) -> Result<(), String> {
        non_blank("name", &self.name)?;
        non_blank("country", &self.country)?;
        non_blank("season", &self.season)
    }

    fn write_to(self, am: &mut entity::league::ActiveModel) {
        am.name = ActiveValue::Set(self.name);
        am.country = ActiveValue::Set(self.country);
        am.season = ActiveValue::Set(self.season);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LeaguePatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub season: Option<String>,
}

impl ChangePayload for LeaguePatch {
    type Entity = entity::league::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.name, |v| non_blank("name", v))?;
        check(&self.country, |v| non_blank("country", v))?;
        check(&self.season, |v| non_blank("season", v))
    }

    fn write_to(self, am: &mut entity::league::ActiveModel) {
        set_if(&mut am.name, self.name);
        set_if(&mut am.country, self.country);
        set_if(&mut am.season, self.season);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMatch {
    pub league_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub kickoff_at: NaiveDateTime,
    /// Defaults to `SCHEDULED`
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub home_score: i32,
    #[serde(default)]
    pub away_score: i32,
}

impl ChangePayload for NewMatch {
    type Entity = entity::football_match::Entity;

    fn validate(&self) -> Result<(), String> {
        if self.home_team_id == self.away_team_id {
            return Err("homeTeamId and awayTeamId must differ".to_string());
        }

        non_negative("homeScore", self.home_score)?;
        non_negative("awayScore", self.away_score)
    }

    fn write_to(self, am: &mut entity::football_match::ActiveModel) {
        am.league_id = ActiveValue::Set(self.league_id);
        am.home_team_id = ActiveValue::Set(self.home_team_id);
        am.away_team_id = ActiveValue::Set(self.away_team_id);
        am.kickoff_at = ActiveValue::Set(self.kickoff_at);
        am.status = ActiveValue::Set(self.status.unwrap_or(MatchStatus::Scheduled));
        am.home_score = ActiveValue::Set(self.home_score);
        am.away_score = ActiveValue::Set(self.away_score);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchPatch {
    pub league_id: Option<i32>,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub kickoff_at: Option<NaiveDateTime>,
    pub status: Option<MatchStatus>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl ChangePayload for MatchPatch {
    type Entity = entity::football_match::Entity;

    fn validate(&self) -> Result<(), String> {
        if let (Some(home), Some(away)) = (self.home_team_id, self.away_team_id) {
            if home == away {
                return Err("homeTeamId and awayTeamId must differ".to_string());
            }
        }

        check(&self.home_score, |v| non_negative("homeScore", *v))?;
        check(&self.away_score, |v| non_negative("awayScore", *v))
    }

    fn write_to(self, am: &mut entity::football_match::ActiveModel) {
        set_if(&mut am.league_id, self.league_id);
        set_if(&mut am.home_team_id, self.home_team_id);
        set_if(&mut am.away_team_id, self.away_team_id);
        set_if(&mut am.kickoff_at, self.kickoff_at);
        set_if(&mut am.status, self.status);
        set_if(&mut am.home_score, self.home_score);
        set_if(&mut am.away_score, self.away_score);
    }

    fn check_merged(am: &entity::football_match::ActiveModel) -> Result<(), String> {
        let home = current(&am.home_team_id);
        if home.is_some() && home == current(&am.away_team_id) {
            return Err("homeTeamId and awayTeamId must differ".to_string());
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMatchEvent {
    pub match_id: i32,
    pub team_id: i32,
    pub player_id: Option<i32>,
    pub minute: i32,
    pub event_type: String,
    pub detail: Option<String>,
}

impl ChangePayload for NewMatchEvent {
    type Entity = entity::match_event::Entity;

    fn validate(&self) -> Result<(), String> {
        non_negative("minute", self.minute)?;
        non_blank("eventType", &self.event_type)
    }

    fn write_to(self, am: &mut entity::match_event::ActiveModel) {
        am.match_id = ActiveValue::Set(self.match_id);
        am.team_id = ActiveValue::Set(self.team_id);
        am.player_id = ActiveValue::Set(self.player_id);
        am.minute = ActiveValue::Set(self.minute);
        am.event_type = ActiveValue::Set(self.event_type);
        am.detail = ActiveValue::Set(self.detail);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchEventPatch {
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    pub minute: Option<i32>,
    pub event_type: Option<String>,
    pub detail: Option<String>,
}

impl ChangePayload for MatchEventPatch {
    type Entity = entity::match_event::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.minute, |v| non_negative("minute", *v))?;
        check(&self.event_type, |v| non_blank("eventType", v))
    }

    fn write_to(self, am: &mut entity::match_event::ActiveModel) {
        set_if(&mut am.team_id, self.team_id);
        set_if(&mut am.player_id, self.player_id.map(Some));
        set_if(&mut am.minute, self.minute);
        set_if(&mut am.event_type, self.event_type);
        set_if(&mut am.detail, self.detail.map(Some));
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPlayerMatchStats {
    pub player_id: i32,
    pub match_id: i32,
    #[serde(default)]
    pub minutes_played: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub yellow_cards: i32,
    #[serde(default)]
    pub red_cards: i32,
}

impl ChangePayload for NewPlayerMatchStats {
    type Entity = entity::player_match_stats::Entity;

    fn validate(&self) -> Result<(), String> {
        non_negative("minutesPlayed", self.minutes_played)?;
        non_negative("goals", self.goals)?;
        non_negative("assists", self.assists)?;
        non_negative("yellowCards", self.yellow_cards)?;
        non_negative("redCards", self.red_cards)
    }

    fn write_to(self, am: &mut entity::player_match_stats::ActiveModel) {
        am.player_id = ActiveValue::Set(self.player_id);
        am.match_id = ActiveValue::Set(self.match_id);
        am.minutes_played = ActiveValue::Set(self.minutes_played);
        am.goals = ActiveValue::Set(self.goals);
        am.assists = ActiveValue::Set(self.assists);
        am.yellow_cards = ActiveValue::Set(self.yellow_cards);
        am.red_cards = ActiveValue::Set(self.red_cards);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerMatchStatsPatch {
    pub minutes_played: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
}

impl ChangePayload for PlayerMatchStatsPatch {
    type Entity = entity::player_match_stats::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.minutes_played, |v| non_negative("minutesPlayed", *v))?;
        check(&self.goals, |v| non_negative("goals", *v))?;
        check(&self.assists, |v| non_negative("assists", *v))?;
        check(&self.yellow_cards, |v| non_negative("yellowCards", *v))?;
        check(&self.red_cards, |v| non_negative("redCards", *v))
    }

    fn write_to(self, am: &mut entity::player_match_stats::ActiveModel) {
        set_if(&mut am.minutes_played, self.minutes_played);
        set_if(&mut am.goals, self.goals);
        set_if(&mut am.assists, self.assists);
        set_if(&mut am.yellow_cards, self.yellow_cards);
        set_if(&mut am.red_cards, self.red_cards);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPlayerSeasonStats {
    pub player_id: i32,
    pub league_id: i32,
    pub season: String,
    #[serde(default)]
    pub appearances: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
}

impl ChangePayload for NewPlayerSeasonStats {
    type Entity = entity::player_season_stats::Entity;

    fn validate(&self) -> Result<(), String> {
        non_blank("season", &self.season)?;
        non_negative("appearances", self.appearances)?;
        non_negative("goals", self.goals)?;
        non_negative("assists", self.assists)
    }

    fn write_to(self, am: &mut entity::player_season_stats::ActiveModel) {
        am.player_id = ActiveValue::Set(self.player_id);
        am.league_id = ActiveValue::Set(self.league_id);
        am.season = ActiveValue::Set(self.season);
        am.appearances = ActiveValue::Set(self.appearances);
        am.goals = ActiveValue::Set(self.goals);
        am.assists = ActiveValue::Set(self.assists);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerSeasonStatsPatch {
    pub appearances: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
}

impl ChangePayload for PlayerSeasonStatsPatch {
    type Entity = entity::player_season_stats::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.appearances, |v| non_negative("appearances", *v))?;
        check(&self.goals, |v| non_negative("goals", *v))?;
        check(&self.assists, |v| non_negative("assists", *v))
    }

    fn write_to(self, am: &mut entity::player_season_stats::ActiveModel) {
        set_if(&mut am.appearances, self.appearances);
        set_if(&mut am.goals, self.goals);
        set_if(&mut am.assists, self.assists);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTransfer {
    pub player_id: i32,
    pub from_team_id: Option<i32>,
    pub to_team_id: i32,
    pub fee: Option<i64>,
    pub transfer_date: NaiveDate,
}

impl ChangePayload for NewTransfer {
    type Entity = entity::transfer::Entity;

    fn validate(&self) -> Result<(), String> {
        if self.from_team_id == Some(self.to_team_id) {
            return Err("fromTeamId and toTeamId must differ".to_string());
        }

        match self.fee {
            Some(fee) if fee < 0 => Err("fee must not be negative".to_string()),
            _ => Ok(()),
        }
    }

    fn write_to(self, am: &mut entity::transfer::ActiveModel) {
        am.player_id = ActiveValue::Set(self.player_id);
        am.from_team_id = ActiveValue::Set(self.from_team_id);
        am.to_team_id = ActiveValue::Set(self.to_team_id);
        am.fee = ActiveValue::Set(self.fee);
        am.transfer_date = ActiveValue::Set(self.transfer_date);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransferPatch {
    pub fee: Option<i64>,
    pub transfer_date: Option<NaiveDate>,
}

impl ChangePayload for TransferPatch {
    type Entity = entity::transfer::Entity;

    fn validate(&self) -> Result<(), String> {
        match self.fee {
            Some(fee) if fee < 0 => Err("fee must not be negative".to_string()),
            _ => Ok(()),
        }
    }

    fn write_to(self, am: &mut entity::transfer::ActiveModel) {
        set_if(&mut am.fee, self.fee.map(Some));
        set_if(&mut am.transfer_date, self.transfer_date);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTrophy {
    pub name: String,
    pub season: String,
    pub winner_team_id: Option<i32>,
}

impl ChangePayload for NewTrophy {
    type Entity = entity::trophy::Entity;

    fn validate(&self) -> Result<(), String> {
        non_blank("name", &self.name)?;
        non_blank("season", &self.season)
    }

    fn write_to(self, am: &mut entity::trophy::ActiveModel) {
        am.name = ActiveValue::Set(self.name);
        am.season = ActiveValue::Set(self.season);
        am.winner_team_id = ActiveValue::Set(self.winner_team_id);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrophyPatch {
    pub name: Option<String>,
    pub season: Option<String>,
    pub winner_team_id: Option<i32>,
}

impl ChangePayload for TrophyPatch {
    type Entity = entity::trophy::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.name, |v| non_blank("name", v))?;
        check(&self.season, |v| non_blank("season", v))
    }

    fn write_to(self, am: &mut entity::trophy::ActiveModel) {
        set_if(&mut am.name, self.name);
        set_if(&mut am.season, self.season);
        set_if(&mut am.winner_team_id, self.winner_team_id.map(Some));
    }
}

/// Links a player to a trophy they won.
///
/// The same payload serves UPDATE, re-pointing an existing link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPlayerTrophy {
    pub player_id: i32,
    pub trophy_id: i32,
}

impl ChangePayload for NewPlayerTrophy {
    type Entity = entity::player_trophy::Entity;

    fn write_to(self, am: &mut entity::player_trophy::ActiveModel) {
        am.player_id = ActiveValue::Set(self.player_id);
        am.trophy_id = ActiveValue::Set(self.trophy_id);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerTrophyPatch {
    pub player_id: Option<i32>,
    pub trophy_id: Option<i32>,
}

impl ChangePayload for PlayerTrophyPatch {
    type Entity = entity::player_trophy::Entity;

    fn write_to(self, am: &mut entity::player_trophy::ActiveModel) {
        set_if(&mut am.player_id, self.player_id);
        set_if(&mut am.trophy_id, self.trophy_id);
    }
}

fn valid_price(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value <= 1.0 {
        return Err(format!("{} must be decimal odds greater than 1.0", field));
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewOdd {
    pub match_id: i32,
    pub bookmaker: String,
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}

impl ChangePayload for NewOdd {
    type Entity = entity::odd::Entity;

    fn validate(&self) -> Result<(), String> {
        non_blank("bookmaker", &self.bookmaker)?;
        valid_price("homeWin", self.home_win)?;
        valid_price("draw", self.draw)?;
        valid_price("awayWin", self.away_win)
    }

    fn write_to(self, am: &mut entity::odd::ActiveModel) {
        am.match_id = ActiveValue::Set(self.match_id);
        am.bookmaker = ActiveValue::Set(self.bookmaker);
        am.home_win = ActiveValue::Set(self.home_win);
        am.draw = ActiveValue::Set(self.draw);
        am.away_win = ActiveValue::Set(self.away_win);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OddPatch {
    pub bookmaker: Option<String>,
    pub home_win: Option<f64>,
    pub draw: Option<f64>,
    pub away_win: Option<f64>,
}

impl ChangePayload for OddPatch {
    type Entity = entity::odd::Entity;

    fn validate(&self) -> Result<(), String> {
        check(&self.bookmaker, |v| non_blank("bookmaker", v))?;
        check(&self.home_win, |v| valid_price("homeWin", *v))?;
        check(&self.draw, |v| valid_price("draw", *v))?;
        check(&self.away_win, |v| valid_price("awayWin", *v))
    }

    fn write_to(self, am: &mut entity::odd::ActiveModel) {
        set_if(&mut am.bookmaker, self.bookmaker);
        set_if(&mut am.home_win, self.home_win);
        set_if(&mut am.draw, self.draw);
        set_if(&mut am.away_win, self.away_win);
    }
}
