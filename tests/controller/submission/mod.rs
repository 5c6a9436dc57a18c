mod approve;
mod create;
mod pending;
mod reject;

use entity::sea_orm_active_enums::{SubmissionOperation, SubmissionStatus, TargetType};
use serde_json::json;
use touchline::server::model::session::user::SessionUserId;

use super::*;

/// Build a context with admin ID 1, contributor ID 2 and football tables
async fn setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_football_tables()
        .with_mock_admin("referee")
        .with_mock_user("contributor")
        .build()
        .await?;

    Ok(test)
}

async fn login(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}
