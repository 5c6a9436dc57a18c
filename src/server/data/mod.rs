//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (users, moderation and football data). Every repository is generic
//! over [`sea_orm::ConnectionTrait`] so it can run against a pooled connection or inside a
//! transaction.

pub mod football;
pub mod review;
pub mod submission;
pub mod touchline_user;
