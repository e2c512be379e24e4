use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        character::{CharacterDto, CreateCharacterDto},
        favorite::FavoriteDto,
    },
    server::{
        controller::util::ok_message,
        error::{
            record::{Record, RecordError},
            Error,
        },
        model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List every character
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters in insertion order", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db, state.favorite_policy.on_target_delete)
        .get_all_characters()
        .await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;

    let service = CharacterService::new(&state.db, state.favorite_policy.on_target_delete);

    let Some(character) = service.get_character(character_id).await? else {
        return Err(RecordError::NotFound {
            record: Record::Character,
            id: character_id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character, names must be unique
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "New character created", body = MessageDto),
        (status = 400, description = "character already exists or body is invalid", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(character) = payload?;

    CharacterService::new(&state.db, state.favorite_policy.on_target_delete)
        .create_character(character)
        .await?;

    Ok(ok_message("New character created"))
}

/// Delete a character, favorites pointing at it are handled by the configured delete policy
#[utoipa::path(
    delete,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "character deleted successfully", body = MessageDto),
        (status = 400, description = "character is still in a favorites list", body = MessageDto),
        (status = 404, description = "character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;

    CharacterService::new(&state.db, state.favorite_policy.on_target_delete)
        .delete_character(character_id)
        .await?;

    Ok(ok_message("character deleted successfully"))
}

/// List every favorite pointing at a character
#[utoipa::path(
    get,
    path = "/character/{id}/favorites",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Favorites for the character", body = Vec<FavoriteDto>),
        (status = 404, description = "character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_character_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;

    let favorites = CharacterService::new(&state.db, state.favorite_policy.on_target_delete)
        .get_character_favorites(character_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
