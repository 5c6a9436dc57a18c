//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, providing a single point of reference for model types
//! without importing from the `entity` crate directly.

/// Type alias for Touchline user database model.
///
/// # Fields (from `entity::touchline_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Unique display name
/// - `is_admin` - Whether the user may decide submissions
/// - `created_at` - Timestamp when the user account was created
pub type UserModel = entity::touchline_user::Model;

/// Type alias for submission database model.
///
/// Represents a proposed create, update or delete of a canonical football record, awaiting
/// or past moderation.
///
/// # Fields (from `entity::submission::Model`)
/// - `id` - Primary key
/// - `created_by_id` - Foreign key to the contributing user
/// - `target_type` - Kind of entity the change applies to
/// - `operation` - CREATE, UPDATE or DELETE
/// - `target_id` - ID of the existing entity for UPDATE and DELETE
/// - `changes` - JSON payload of proposed field values
/// - `status` - PENDING, APPROVED or REJECTED
/// - `created_at` - Timestamp when the submission was made
/// - `updated_at` - Timestamp of the last status change
pub type SubmissionModel = entity::submission::Model;

/// Type alias for review database model.
///
/// At most one review exists per submission.
///
/// # Fields (from `entity::review::Model`)
/// - `id` - Primary key
/// - `reviewer_id` - Foreign key to the deciding administrator
/// - `submission_id` - Foreign key to the decided submission (unique)
/// - `decision` - APPROVED or REJECTED
/// - `comment` - Optional reviewer comment
/// - `created_at` - Timestamp of the decision
pub type ReviewModel = entity::review::Model;

pub type TeamModel = entity::team::Model;

pub type LeagueModel = entity::league::Model;

/// Type alias for football match database model.
///
/// Scores are only meaningful once `status` is `Finished`.
pub type MatchModel = entity::football_match::Model;
