//! Tests for the user endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::user::{CreateUserDto, UserDto},
    server::controller::user::{create_user, delete_user, get_user, get_user_favorites},
};

use super::*;

fn new_user(email: &str) -> CreateUserDto {
    CreateUserDto {
        username: Some("leia".to_string()),
        name: Some("Leia".to_string()),
        lastname: Some("Organa".to_string()),
        password: "secret".to_string(),
        email: email.to_string(),
    }
}

/// Expected: 200 "New user created", then 400 "User email already exists"
#[tokio::test]
async fn create_user_rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_user(State(test.to_app_state()), Ok(Json(new_user("a@x.com"))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "New user created");

    let resp = create_user(State(test.to_app_state()), Ok(Json(new_user("a@x.com"))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_msg(resp).await?, "User email already exists");

    Ok(())
}

/// Expected: 200 with the user, no password field in the body
#[tokio::test]
async fn get_user_omits_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .build()
        .await?;

    let resp = get_user(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await?;
    assert!(body.get("password").is_none());
    let user: UserDto = serde_json::from_value(body)?;
    assert_eq!(user.email, "a@x.com");

    Ok(())
}

/// Expected: 404 "User not found"
#[tokio::test]
async fn get_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_user(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_msg(resp).await?, "User not found");

    Ok(())
}

/// Expected: 200 "User deleted successfully", then 404 "User not found"
#[tokio::test]
async fn delete_user_twice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .build()
        .await?;

    let resp = delete_user(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "User deleted successfully");

    let resp = delete_user(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_msg(resp).await?, "User not found");

    Ok(())
}

/// Expected: 404 for a missing user
#[tokio::test]
async fn get_user_favorites_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_user_favorites(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 500 with a generic message when the database is unusable
#[tokio::test]
async fn internal_error_hides_details() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_user(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_msg(resp).await?, "Internal server error");

    Ok(())
}
