pub use sea_orm_migration::prelude::*;

mod m20251101_000001_touchline_user;
mod m20251101_000002_team;
mod m20251101_000003_league;
mod m20251101_000004_player;
mod m20251101_000005_football_match;
mod m20251101_000006_match_event;
mod m20251101_000007_player_match_stats;
mod m20251101_000008_player_season_stats;
mod m20251101_000009_transfer;
mod m20251101_000010_trophy;
mod m20251101_000011_player_trophy;
mod m20251101_000012_odd;
mod m20251101_000013_submission;
mod m20251101_000014_review;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_touchline_user::Migration),
            Box::new(m20251101_000002_team::Migration),
            Box::new(m20251101_000003_league::Migration),
            Box::new(m20251101_000004_player::Migration),
            Box::new(m20251101_000005_football_match::Migration),
            Box::new(m20251101_000006_match_event::Migration),
            Box::new(m20251101_000007_player_match_stats::Migration),
            Box::new(m20251101_000008_player_season_stats::Migration),
            Box::new(m20251101_000009_transfer::Migration),
            Box::new(m20251101_000010_trophy::Migration),
            Box::new(m20251101_000011_player_trophy::Migration),
            Box::new(m20251101_000012_odd::Migration),
            Box::new(m20251101_000013_submission::Migration),
            Box::new(m20251101_000014_review::Migration),
        ]
    }
}
