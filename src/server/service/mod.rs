//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and coordinates
//! between repositories and the cache. Services include moderation of community submissions,
//! league standings, team form, retry logic and user lookup.

pub mod league;
pub mod retry;
pub mod submission;
pub mod team;
pub mod user;
