//! Repositories for canonical football data.

pub mod football_match;
pub mod league;
pub mod team;
