use axum::{http::StatusCode, response::IntoResponse};
use touchline::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect 204 and the user removed from session after logout
#[tokio::test]
async fn clears_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 when logging out without any session data
#[tokio::test]
async fn succeeds_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
