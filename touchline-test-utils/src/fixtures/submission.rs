//! Submission fixtures.
//!
//! Records are written straight to the database so tests can create rows the API would
//! refuse, such as an UPDATE without a target ID or a payload of the wrong shape.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{SubmissionOperation, SubmissionStatus, TargetType};
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::Value;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn submission<'a>(&'a mut self) -> SubmissionFixtures<'a> {
        SubmissionFixtures { setup: self }
    }
}

pub struct SubmissionFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SubmissionFixtures<'a> {
    /// Insert a pending submission created now.
    pub async fn insert_pending(
        &self,
        created_by_id: i32,
        target_type: TargetType,
        operation: SubmissionOperation,
        target_id: Option<i32>,
        changes: Option<Value>,
    ) -> Result<entity::submission::Model, TestError> {
        self.insert_pending_aged(
            created_by_id,
            target_type,
            operation,
            target_id,
            changes,
            Duration::zero(),
        )
        .await
    }

    /// Insert a pending submission whose creation time lies `age` in the past.
    pub async fn insert_pending_aged(
        &self,
        created_by_id: i32,
        target_type: TargetType,
        operation: SubmissionOperation,
        target_id: Option<i32>,
        changes: Option<Value>,
        age: Duration,
    ) -> Result<entity::submission::Model, TestError> {
        let created_at = Utc::now().naive_utc() - age;

        Ok(
            entity::prelude::Submission::insert(entity::submission::ActiveModel {
                created_by_id: ActiveValue::Set(created_by_id),
                target_type: ActiveValue::Set(target_type),
                operation: ActiveValue::Set(operation),
                target_id: ActiveValue::Set(target_id),
                changes: ActiveValue::Set(changes),
                status: ActiveValue::Set(SubmissionStatus::Pending),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
