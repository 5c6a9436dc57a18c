//! Test fixture modules for database record creation.
//!
//! - `user` - Touchline user accounts, regular and administrator
//! - `football` - Teams, leagues and matches, plus in-memory model factories
//! - `submission` - Submissions inserted directly, bypassing request validation

pub mod football;
pub mod submission;
pub mod user;
