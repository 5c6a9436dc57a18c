//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases and session data structures. These models bridge the gap between
//! database entities and HTTP handlers.

pub mod app;
pub mod db;
pub mod session;
