use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the signed-in account's database ID.
pub const SESSION_USER_ID_KEY: &str = "touchline:user:id";

/// Account ID of the contributor or admin who owns the session.
///
/// Stored as a string so a value written by an older deployment still deserializes and a
/// malformed one surfaces as [`Error::ParseError`] rather than a session store failure.
#[derive(Default, Deserialize, Serialize, Debug)]
#[serde(transparent)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Marks the session as signed in to `user_id`, replacing any previous account.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Account ID of the signed-in user, `None` for anonymous sessions.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let Some(SessionUserId(raw)) = session.get::<SessionUserId>(SESSION_USER_ID_KEY).await?
        else {
            return Ok(None);
        };

        raw.parse::<i32>().map(Some).map_err(|e| {
            Error::ParseError(format!("Session account ID '{}' is not numeric: {}", raw, e))
        })
    }

    /// Signs the session out. Removing from an anonymous session is a no-op.
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session.remove::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use touchline_test_utils::prelude::*;

    use super::{SessionUserId, SESSION_USER_ID_KEY};
    use crate::server::error::Error;

    /// Expect the signed-in account ID to be read back after sign-in
    #[tokio::test]
    async fn reads_back_signed_in_account() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        SessionUserId::insert(&test.session, 2).await.unwrap();

        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(2));

        Ok(())
    }

    /// Expect signing in again to replace the previous account
    #[tokio::test]
    async fn switching_account_replaces_id() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        SessionUserId::insert(&test.session, 1).await.unwrap();
        SessionUserId::insert(&test.session, 2).await.unwrap();

        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(2));

        Ok(())
    }

    /// Expect an anonymous session to have no account
    #[tokio::test]
    async fn anonymous_session_has_no_account() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    /// Expect a non-numeric stored ID to be reported as a parse error
    #[tokio::test]
    async fn rejects_non_numeric_account_id() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        test.session
            .insert(SESSION_USER_ID_KEY, SessionUserId("admin".to_string()))
            .await?;

        let result = SessionUserId::get(&test.session).await;

        assert!(matches!(result, Err(Error::ParseError(_))));

        Ok(())
    }

    /// Expect sign-out to clear the account and to be harmless on anonymous sessions
    #[tokio::test]
    async fn sign_out_clears_account() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        SessionUserId::remove(&test.session).await.unwrap();

        SessionUserId::insert(&test.session, 1).await.unwrap();
        SessionUserId::remove(&test.session).await.unwrap();

        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }
}
