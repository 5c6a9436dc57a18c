use axum::{extract::State, http::StatusCode, response::IntoResponse};
use touchline::{
    model::user::UserDto,
    server::{controller::auth::get_user, model::session::user::SessionUserId},
};

use super::*;

/// Expect 200 with the user stored in session
#[tokio::test]
async fn returns_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_admin("referee").build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user: UserDto = response_json(resp).await;
    assert_eq!(user.username, "referee");
    assert!(user.is_admin);

    Ok(())
}

/// Expect 401 without a user in session
#[tokio::test]
async fn returns_unauthorized_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 and a cleared session when the session user no longer exists
#[tokio::test]
async fn clears_session_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionUserId::insert(&test.session, 7).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 500 when the user table does not exist
#[tokio::test]
async fn returns_error_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
