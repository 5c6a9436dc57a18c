//! Test utilities shared by Touchline's unit and integration tests.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, then the resulting [`TestContext`] exposes the in-memory database, a session and
//! fixture helpers for inserting further records during the test itself.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::football::factory, TestBuilder, TestContext, TestError};
}
