//! `SeaORM` Entity definitions for the Touchline database

pub mod prelude;

pub mod football_match;
pub mod league;
pub mod match_event;
pub mod odd;
pub mod player;
pub mod player_match_stats;
pub mod player_season_stats;
pub mod player_trophy;
pub mod review;
pub mod sea_orm_active_enums;
pub mod submission;
pub mod team;
pub mod touchline_user;
pub mod transfer;
pub mod trophy;
