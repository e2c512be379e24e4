//! Tests for the planet and character endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        character::{CharacterDto, CreateCharacterDto},
        planet::CreatePlanetDto,
    },
    server::{
        controller::{
            character::{create_character, delete_character, get_character, get_characters},
            planet::{create_planet, delete_planet, get_planet},
        },
        model::favorite::{FavoritePolicy, TargetDeletePolicy},
    },
};

use super::*;

fn tatooine() -> Result<Json<CreatePlanetDto>, JsonRejection> {
    Ok(Json(CreatePlanetDto {
        name: "Tatooine".to_string(),
    }))
}

/// Expected: 200 "New planet created", then 400 "Planet already exists"
#[tokio::test]
async fn create_planet_rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let resp = create_planet(State(test.to_app_state()), tatooine())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "New planet created");

    let resp = create_planet(State(test.to_app_state()), tatooine())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_msg(resp).await?, "Planet already exists");

    Ok(())
}

/// Expected: 404 "Planet not found" for both lookup and delete
#[tokio::test]
async fn missing_planet_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_planet(State(test.to_app_state()), Ok(Path(7)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_msg(resp).await?, "Planet not found");

    let resp = delete_planet(State(test.to_app_state()), Ok(Path(7)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_msg(resp).await?, "Planet not found");

    Ok(())
}

/// Expected: 400 "Planet is still in a favorites list" under Restrict
#[tokio::test]
async fn delete_planet_restricted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .with_planet("Alderaan")
        .build()
        .await?;
    test.favorite().insert_planet_favorite(1, 1).await?;
    let state = test.app_state_with(FavoritePolicy {
        on_target_delete: TargetDeletePolicy::Restrict,
        ..Default::default()
    });

    let resp = delete_planet(State(state), Ok(Path(1))).await.into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_msg(resp).await?, "Planet is still in a favorites list");

    Ok(())
}

/// Expected: 200 messages use the lowercase "character" wording
#[tokio::test]
async fn character_lifecycle_messages() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_character(
        State(test.to_app_state()),
        Ok(Json(CreateCharacterDto {
            name: "Han Solo".to_string(),
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "New character created");

    let resp = get_characters(State(test.to_app_state()))
        .await
        .into_response();
    let characters: Vec<CharacterDto> = read_json(resp).await?;
    assert_eq!(characters.len(), 1);

    let resp = delete_character(State(test.to_app_state()), Ok(Path(characters[0].id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_msg(resp).await?, "character deleted successfully");

    let resp = get_character(State(test.to_app_state()), Ok(Path(characters[0].id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_msg(resp).await?, "character not found");

    Ok(())
}
