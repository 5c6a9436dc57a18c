use entity::sea_orm_active_enums::{SubmissionOperation, SubmissionStatus, TargetType};
use serde_json::json;
use touchline_test_utils::prelude::*;

mod get_pending;
mod get_review;
