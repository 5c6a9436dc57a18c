//! Tests for HTTP controller endpoints.

mod auth;
mod league;
mod submission;
mod team;

use touchline_test_utils::prelude::*;

use crate::util::{response_json, TestContextExt};
