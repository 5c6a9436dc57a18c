use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{
    ReviewDecision, SubmissionOperation, SubmissionStatus, TargetType,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A proposed change to canonical football data awaiting or past moderation.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: i32,
    pub created_by_id: i32,
    pub target_type: TargetType,
    pub operation: SubmissionOperation,
    pub target_id: Option<i32>,
    /// Proposed field values, shape depends on `targetType` and `operation`
    pub changes: Option<Value>,
    pub status: SubmissionStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Record of an administrator's decision on a submission.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub reviewer_id: i32,
    pub submission_id: i32,
    pub decision: ReviewDecision,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request body for proposing a change.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionDto {
    pub target_type: TargetType,
    pub operation: SubmissionOperation,
    #[serde(default)]
    pub target_id: Option<i32>,
    /// Absent is `None`, an explicit JSON `null` is `Some(Value::Null)`
    #[serde(default, deserialize_with = "deserialize_present")]
    pub changes: Option<Value>,
}

/// Request body for approving or rejecting a submission.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionDto {
    #[serde(default)]
    pub comment: Option<String>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
