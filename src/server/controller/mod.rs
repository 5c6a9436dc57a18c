//! HTTP controller endpoints for the Touchline web API.
//!
//! Controllers extract the caller from the session where required, delegate to the service
//! layer and map results to JSON responses. Every handler is annotated for utoipa so it
//! appears in the generated OpenAPI document.

pub mod auth;
pub mod league;
pub mod submission;
pub mod team;
pub mod util;
