//! Touchline: football data platform with moderated community submissions.

pub mod model;
pub mod server;
