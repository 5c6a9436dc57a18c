//! Typed submission changes.
//!
//! A submission's `(targetType, operation, targetId, changes)` tuple is parsed into an
//! [`EntityChange`] once when the submission is created, and again from the stored row when
//! it is approved. Applying a change dispatches by exhaustive match, so every target type has
//! a create, update and delete path.

mod payload;

#[cfg(test)]
mod tests;

pub use payload::*;

use entity::sea_orm_active_enums::{SubmissionOperation, TargetType};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};
use serde_json::Value;

use crate::server::error::{submission::SubmissionError, Error};

/// Proposed mutation of a single entity.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeSet<N, P> {
    Create(N),
    Update { target_id: i32, patch: P },
    Delete { target_id: i32 },
}

impl<N, P> ChangeSet<N, P>
where
    N: ChangePayload,
    P: ChangePayload<Entity = N::Entity>,
{
    /// Parse the operation's payload, enforcing target ID and payload rules per operation.
    ///
    /// - CREATE takes a complete record and no target ID
    /// - UPDATE takes a target ID and a patch with at least one non-null field
    /// - DELETE takes a target ID and no changes beyond an explicit `null`
    pub fn parse(
        operation: SubmissionOperation,
        target_id: Option<i32>,
        changes: Option<&Value>,
    ) -> Result<Self, String> {
        match operation {
            SubmissionOperation::Create => {
                if target_id.is_some() {
                    return Err("CREATE must not reference a targetId".to_string());
                }

                Ok(Self::Create(parse_payload(changes)?))
            }
            SubmissionOperation::Update => {
                let target_id = target_id.ok_or("UPDATE requires a targetId")?;

                let has_changes = changes
                    .and_then(Value::as_object)
                    .is_some_and(|fields| fields.values().any(|value| !value.is_null()));
                if !has_changes {
                    return Err("UPDATE requires at least one changed field".to_string());
                }

                Ok(Self::Update {
                    target_id,
                    patch: parse_payload(changes)?,
                })
            }
            SubmissionOperation::Delete => {
                let target_id = target_id.ok_or("DELETE requires a targetId")?;

                if changes.is_some_and(|value| !value.is_null()) {
                    return Err("DELETE does not accept changes".to_string());
                }

                Ok(Self::Delete { target_id })
            }
        }
    }
}

fn parse_payload<T: ChangePayload>(changes: Option<&Value>) -> Result<T, String> {
    let value = changes
        .filter(|value| value.is_object())
        .ok_or("changes must be a JSON object")?;

    let payload = T::deserialize(value).map_err(|e| format!("invalid changes: {}", e))?;
    payload.validate()?;

    Ok(payload)
}

/// Proposed mutation, one variant per target type.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityChange {
    Team(ChangeSet<NewTeam, TeamPatch>),
    Player(ChangeSet<NewPlayer, PlayerPatch>),
    League(ChangeSet<NewLeague, LeaguePatch>),
    Match(ChangeSet<NewMatch, MatchPatch>),
    MatchEvent(ChangeSet<NewMatchEvent, MatchEventPatch>),
    PlayerMatchStats(ChangeSet<NewPlayerMatchStats, PlayerMatchStatsPatch>),
    PlayerSeasonStats(ChangeSet<NewPlayerSeasonStats, PlayerSeasonStatsPatch>),
    Transfer(ChangeSet<NewTransfer, TransferPatch>),
    Trophy(ChangeSet<NewTrophy, TrophyPatch>),
    PlayerTrophy(ChangeSet<NewPlayerTrophy, PlayerTrophyPatch>),
    Odd(ChangeSet<NewOdd, OddPatch>),
}

impl EntityChange {
    pub fn parse(
        target_type: TargetType,
        operation: SubmissionOperation,
        target_id: Option<i32>,
        changes: Option<&Value>,
    ) -> Result<Self, String> {
        Ok(match target_type {
            TargetType::Team => Self::Team(ChangeSet::parse(operation, target_id, changes)?),
            TargetType::Player => Self::Player(ChangeSet::parse(operation, target_id, changes)?),
            TargetType::League => Self::League(ChangeSet::parse(operation, target_id, changes)?),
            TargetType::Match => Self::Match(ChangeSet::parse(operation, target_id, changes)?),
            TargetType::MatchEvent => {
                Self::MatchEvent(ChangeSet::parse(operation, target_id, changes)?)
            }
            TargetType::PlayerMatchStats => {
                Self::PlayerMatchStats(ChangeSet::parse(operation, target_id, changes)?)
            }
            TargetType::PlayerSeasonStats => {
                Self::PlayerSeasonStats(ChangeSet::parse(operation, target_id, changes)?)
            }
            TargetType::Transfer => {
                Self::Transfer(ChangeSet::parse(operation, target_id, changes)?)
            }
            TargetType::Trophy => Self::Trophy(ChangeSet::parse(operation, target_id, changes)?),
            TargetType::PlayerTrophy => {
                Self::PlayerTrophy(ChangeSet::parse(operation, target_id, changes)?)
            }
            TargetType::Odd => Self::Odd(ChangeSet::parse(operation, target_id, changes)?),
        })
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Team(_) => TargetType::Team,
            Self::Player(_) => TargetType::Player,
            Self::League(_) => TargetType::League,
            Self::Match(_) => TargetType::Match,
            Self::MatchEvent(_) => TargetType::MatchEvent,
            Self::PlayerMatchStats(_) => TargetType::PlayerMatchStats,
            Self::PlayerSeasonStats(_) => TargetType::PlayerSeasonStats,
            Self::Transfer(_) => TargetType::Transfer,
            Self::Trophy(_) => TargetType::Trophy,
            Self::PlayerTrophy(_) => TargetType::PlayerTrophy,
            Self::Odd(_) => TargetType::Odd,
        }
    }

    /// Apply the change to the canonical store.
    ///
    /// Intended to run on a transaction; on error the caller drops the transaction so a
    /// partially applied change is rolled back.
    ///
    /// # Returns
    /// - `Ok(())` - Entity created, updated or deleted
    /// - `Err(Error::SubmissionError(SubmissionError::TargetNotFound))` - UPDATE or DELETE
    ///   target does not exist
    /// - `Err(Error::SubmissionError(SubmissionError::Inapplicable))` - UPDATE would leave the
    ///   target inconsistent, e.g. a match whose home and away team are the same
    /// - `Err(Error::DbErr)` - Store rejected the mutation, e.g. a foreign key violation
    pub async fn apply<C: ConnectionTrait>(self, conn: &C) -> Result<(), Error> {
        let target_type = self.target_type();

        match self {
            Self::Team(change) => apply_change_set(conn, target_type, change).await,
            Self::Player(change) => apply_change_set(conn, target_type, change).await,
            Self::League(change) => apply_change_set(conn, target_type, change).await,
            Self::Match(change) => apply_change_set(conn, target_type, change).await,
            Self::MatchEvent(change) => apply_change_set(conn, target_type, change).await,
            Self::PlayerMatchStats(change) => apply_change_set(conn, target_type, change).await,
            Self::PlayerSeasonStats(change) => apply_change_set(conn, target_type, change).await,
            Self::Transfer(change) => apply_change_set(conn, target_type, change).await,
            Self::Trophy(change) => apply_change_set(conn, target_type, change).await,
            Self::PlayerTrophy(change) => apply_change_set(conn, target_type, change).await,
            Self::Odd(change) => apply_change_set(conn, target_type, change).await,
        }
    }
}

async fn apply_change_set<E, C, N, P>(
    conn: &C,
    target_type: TargetType,
    change: ChangeSet<N, P>,
) -> Result<(), Error>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
    N: ChangePayload<Entity = E>,
    P: ChangePayload<Entity = E>,
{
    match change {
        ChangeSet::Create(new) => {
            let mut active_model = <E::ActiveModel as Default>::default();
            new.write_to(&mut active_model);

            active_model.insert(conn).await?;
        }
        ChangeSet::Update { target_id, patch } => {
            let Some(model) = E::find_by_id(target_id).one(conn).await? else {
                return Err(SubmissionError::TargetNotFound {
                    target_type,
                    target_id,
                }
                .into());
            };

            let mut active_model = model.into_active_model();
            patch.write_to(&mut active_model);

            P::check_merged(&active_model).map_err(|reason| SubmissionError::Inapplicable {
                target_type,
                target_id,
                reason,
            })?;

            active_model.update(conn).await?;
        }
        ChangeSet::Delete { target_id } => {
            let result = E::delete_by_id(target_id).exec(conn).await?;

            if result.rows_affected == 0 {
                return Err(SubmissionError::TargetNotFound {
                    target_type,
                    target_id,
                }
                .into());
            }
        }
    }

    Ok(())
}
