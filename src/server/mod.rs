//! Server application core modules.
//!
//! HTTP routing, session-based caller identity, database access, the moderation workflow
//! and the cached standings and form aggregates.

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
