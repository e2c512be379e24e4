//! Tests for the favorites endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::favorite::FavoriteDto,
    server::{
        controller::favorite::{
            add_favorite_character, add_favorite_planet, delete_favorite, get_favorite,
            get_favorites, remove_favorite_character, remove_favorite_planet,
        },
        model::favorite::{FavoriteMatching, FavoritePolicy},
    },
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .with_planet("Tatooine")
        .with_character("Luke Skywalker")
        .build()
        .await
}

/// Add, repeat, remove, and list a planet favorite.
///
/// Expected: 200, 400 duplicate, 200, then an empty favorites list
#[tokio::test]
async fn planet_favorite_round() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = add_favorite_planet(State(test.to_app_state()), Ok(Path((1, 1))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "New planet added to user list");

    let resp = add_favorite_planet(State(test.to_app_state()), Ok(Path((1, 1))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_msg(resp).await?,
        "This planet exists in that user favorites list"
    );

    let resp = remove_favorite_planet(State(test.to_app_state()), Ok(Path((1, 1))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "Planet deleted from user list");

    let resp = get_favorites(State(test.to_app_state()))
        .await
        .into_response();
    let favorites: Vec<FavoriteDto> = read_json(resp).await?;
    assert!(favorites.is_empty());

    Ok(())
}

/// Expected: 400 "character or user not found" when no pairing exists
#[tokio::test]
async fn remove_missing_character_favorite() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = remove_favorite_character(State(test.to_app_state()), Ok(Path((1, 1))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_msg(resp).await?, "character or user not found");

    Ok(())
}

/// Legacy matching reports success for a missing pairing once the coarse check passes.
///
/// Expected: 200 "character deleted from user list", the existing row survives
#[tokio::test]
async fn legacy_remove_reports_success() -> Result<(), TestError> {
    let test = setup().await?;
    let kept = test.favorite().insert_planet_favorite(1, 1).await?;
    let state = test.app_state_with(FavoritePolicy {
        matching: FavoriteMatching::Legacy,
        ..Default::default()
    });

    let resp = remove_favorite_character(State(state.clone()), Ok(Path((1, 1))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "character deleted from user list");

    let resp = get_favorites(State(state)).await.into_response();
    let favorites: Vec<FavoriteDto> = read_json(resp).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, kept.id);

    Ok(())
}

/// Expected: 200 "New character added to user list", then 404 for a missing character
#[tokio::test]
async fn add_character_favorite() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = add_favorite_character(State(test.to_app_state()), Ok(Path((1, 1))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "New character added to user list");

    let resp = add_favorite_character(State(test.to_app_state()), Ok(Path((1, 9))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_msg(resp).await?, "character not found");

    Ok(())
}

/// Expected: 200 on the first delete, 404 "Favorite not found" afterwards
#[tokio::test]
async fn delete_favorite_by_id() -> Result<(), TestError> {
    let test = setup().await?;
    let favorite = test.favorite().insert_character_favorite(1, 1).await?;

    let resp = delete_favorite(State(test.to_app_state()), Ok(Path(favorite.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "Favorite deleted successfully");

    let resp = get_favorite(State(test.to_app_state()), Ok(Path(favorite.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_msg(resp).await?, "Favorite not found");

    Ok(())
}
