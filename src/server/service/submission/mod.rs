//! Moderation of community submissions.
//!
//! Contributors propose creates, updates and deletes of canonical football records; an
//! administrator approves or rejects each proposal exactly once. Approval applies the change,
//! flips the submission's status and records the review in a single transaction, so the
//! canonical data, the submission and its audit record never disagree.

pub mod change;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::{ReviewDecision, SubmissionOperation, SubmissionStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::submission::{CreateSubmissionDto, ReviewDto, SubmissionDto},
    server::{
        data::{review::ReviewRepository, submission::SubmissionRepository},
        error::{submission::SubmissionError, Error},
        model::db::{ReviewModel, SubmissionModel},
        service::submission::change::EntityChange,
    },
};

impl From<SubmissionModel> for SubmissionDto {
    fn from(submission: SubmissionModel) -> Self {
        Self {
            id: submission.id,
            created_by_id: submission.created_by_id,
            target_type: submission.target_type,
            operation: submission.operation,
            target_id: submission.target_id,
            changes: submission.changes,
            status: submission.status,
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        }
    }
}

impl From<ReviewModel> for ReviewDto {
    fn from(review: ReviewModel) -> Self {
        Self {
            id: review.id,
            reviewer_id: review.reviewer_id,
            submission_id: review.submission_id,
            decision: review.decision,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

/// Service for the submission moderation workflow.
pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    /// Creates a new instance of SubmissionService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a proposed change as a pending submission.
    ///
    /// The request's payload is checked against the target type's schema before anything is
    /// stored; the payload is stored as received, an explicit `null` included.
    ///
    /// # Arguments
    /// - `created_by_id` - ID of the contributing user
    /// - `request` - Target type, operation, optional target ID and changes
    ///
    /// # Returns
    /// - `Ok(SubmissionDto)` - The new `PENDING` submission
    /// - `Err(Error::SubmissionError(SubmissionError::InvalidSubmission))` - Target ID or
    ///   payload does not fit the operation and target type
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_submission(
        &self,
        created_by_id: i32,
        request: CreateSubmissionDto,
    ) -> Result<SubmissionDto, Error> {
        EntityChange::parse(
            request.target_type,
            request.operation,
            request.target_id,
            request.changes.as_ref(),
        )
        .map_err(SubmissionError::InvalidSubmission)?;

        let submission = SubmissionRepository::new(self.db)
            .create(
                created_by_id,
                request.target_type,
                request.operation,
                request.target_id,
                request.changes,
            )
            .await?;

        tracing::info!(
            submission_id = %submission.id,
            user_id = %created_by_id,
            target_type = %submission.target_type,
            operation = %submission.operation,
            "Created submission"
        );

        Ok(submission.into())
    }

    /// Lists pending submissions, oldest first.
    pub async fn get_pending(&self) -> Result<Vec<SubmissionDto>, Error> {
        let submissions = SubmissionRepository::new(self.db).get_pending().await?;

        Ok(submissions.into_iter().map(SubmissionDto::from).collect())
    }

    /// Lists a user's own submissions, newest first.
    pub async fn get_by_creator(&self, created_by_id: i32) -> Result<Vec<SubmissionDto>, Error> {
        let submissions = SubmissionRepository::new(self.db)
            .get_by_creator(created_by_id)
            .await?;

        Ok(submissions.into_iter().map(SubmissionDto::from).collect())
    }

    /// # Returns
    /// - `Ok(SubmissionDto)` - Submission found
    /// - `Err(Error::SubmissionError(SubmissionError::NotFound))` - No such submission
    pub async fn get_submission(&self, submission_id: i32) -> Result<SubmissionDto, Error> {
        let submission = SubmissionRepository::new(self.db)
            .get(submission_id)
            .await?
            .ok_or(SubmissionError::NotFound(submission_id))?;

        Ok(submission.into())
    }

    /// Gets the review which decided a submission.
    ///
    /// # Returns
    /// - `Ok(ReviewDto)` - Submission has been decided
    /// - `Err(Error::SubmissionError(SubmissionError::NotFound))` - No such submission
    /// - `Err(Error::SubmissionError(SubmissionError::NotReviewed))` - Submission is pending
    pub async fn get_review(&self, submission_id: i32) -> Result<ReviewDto, Error> {
        SubmissionRepository::new(self.db)
            .get(submission_id)
            .await?
            .ok_or(SubmissionError::NotFound(submission_id))?;

        let review = ReviewRepository::new(self.db)
            .get_by_submission_id(submission_id)
            .await?
            .ok_or(SubmissionError::NotReviewed(submission_id))?;

        Ok(review.into())
    }

    /// Approves a pending submission and applies its change.
    ///
    /// The status flip, the entity mutation and the review insert share one transaction; if
    /// any step fails nothing is written and the submission stays `PENDING`.
    ///
    /// # Arguments
    /// - `submission_id` - ID of the submission to approve
    /// - `reviewer_id` - ID of the deciding administrator
    /// - `comment` - Optional reviewer comment
    ///
    /// # Returns
    /// - `Ok(SubmissionDto)` - The `APPROVED` submission
    /// - `Err(Error::SubmissionError(SubmissionError::NotFound))` - No such submission
    /// - `Err(Error::SubmissionError(SubmissionError::AlreadyDecided))` - Submission was
    ///   already approved or rejected, including by a concurrent request
    /// - `Err(Error::SubmissionError(SubmissionError::Malformed))` - Stored submission lacks a
    ///   required target ID or its payload no longer parses
    /// - `Err(Error::SubmissionError(SubmissionError::TargetNotFound))` - UPDATE or DELETE
    ///   target does not exist
    /// - `Err(Error::SubmissionError(SubmissionError::Inapplicable))` - UPDATE conflicts with
    ///   the stored target
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn approve(
        &self,
        submission_id: i32,
        reviewer_id: i32,
        comment: Option<String>,
    ) -> Result<SubmissionDto, Error> {
        self.decide(submission_id, reviewer_id, ReviewDecision::Approved, comment)
            .await
    }

    /// Rejects a pending submission without touching canonical data.
    ///
    /// # Returns
    /// - `Ok(SubmissionDto)` - The `REJECTED` submission
    /// - `Err(Error::SubmissionError(SubmissionError::NotFound))` - No such submission
    /// - `Err(Error::SubmissionError(SubmissionError::AlreadyDecided))` - Submission was
    ///   already approved or rejected
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn reject(
        &self,
        submission_id: i32,
        reviewer_id: i32,
        comment: Option<String>,
    ) -> Result<SubmissionDto, Error> {
        self.decide(submission_id, reviewer_id, ReviewDecision::Rejected, comment)
            .await
    }

    async fn decide(
        &self,
        submission_id: i32,
        reviewer_id: i32,
        decision: ReviewDecision,
        comment: Option<String>,
    ) -> Result<SubmissionDto, Error> {
        let submission = SubmissionRepository::new(self.db)
            .get(submission_id)
            .await?
            .ok_or(SubmissionError::NotFound(submission_id))?;

        if submission.status != SubmissionStatus::Pending {
            return Err(SubmissionError::AlreadyDecided {
                submission_id,
                status: submission.status,
            }
            .into());
        }

        let change = match decision {
            ReviewDecision::Approved => Some(stored_change(&submission)?),
            ReviewDecision::Rejected => None,
        };

        let txn = self.db.begin().await?;
        let submission_repo = SubmissionRepository::new(&txn);

        if !submission_repo.decide(submission_id, decision.into()).await? {
            // Decided by a concurrent request between the read above and the update
            let current = submission_repo
                .get(submission_id)
                .await?
                .ok_or(SubmissionError::NotFound(submission_id))?;

            return Err(SubmissionError::AlreadyDecided {
                submission_id,
                status: current.status,
            }
            .into());
        }

        if let Some(change) = change {
            change.apply(&txn).await?;
        }

        let review = ReviewRepository::new(&txn)
            .create(submission_id, reviewer_id, decision, comment)
            .await?;

        let decided = submission_repo.get(submission_id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Submission ID {} disappeared while being decided",
                submission_id
            ))
        })?;

        txn.commit().await?;

        tracing::info!(
            submission_id = %submission_id,
            review_id = %review.id,
            reviewer_id = %reviewer_id,
            target_type = %decided.target_type,
            operation = %decided.operation,
            status = %decided.status,
            "Decided submission"
        );

        Ok(decided.into())
    }
}

/// Re-parse a stored submission's change for applying.
fn stored_change(submission: &SubmissionModel) -> Result<EntityChange, SubmissionError> {
    if submission.operation != SubmissionOperation::Create && submission.target_id.is_none() {
        return Err(SubmissionError::Malformed {
            submission_id: submission.id,
            reason: format!("{} requires a targetId", submission.operation),
        });
    }

    EntityChange::parse(
        submission.target_type,
        submission.operation,
        submission.target_id,
        submission.changes.as_ref(),
    )
    .map_err(|reason| SubmissionError::Malformed {
        submission_id: submission.id,
        reason,
    })
}
