pub use super::football_match::Entity as FootballMatch;
pub use super::league::Entity as League;
pub use super::match_event::Entity as MatchEvent;
pub use super::odd::Entity as Odd;
pub use super::player::Entity as Player;
pub use super::player_match_stats::Entity as PlayerMatchStats;
pub use super::player_season_stats::Entity as PlayerSeasonStats;
pub use super::player_trophy::Entity as PlayerTrophy;
pub use super::review::Entity as Review;
pub use super::submission::Entity as Submission;
pub use super::team::Entity as Team;
pub use super::touchline_user::Entity as TouchlineUser;
pub use super::transfer::Entity as Transfer;
pub use super::trophy::Entity as Trophy;
