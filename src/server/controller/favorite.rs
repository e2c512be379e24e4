use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, favorite::FavoriteDto},
    server::{
        controller::util::ok_message,
        error::{
            record::{Record, RecordError},
            Error,
        },
        model::{app::AppState, favorite::FavoriteTarget},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITES_TAG: &str = "favorites";

/// List every favorite
#[utoipa::path(
    get,
    path = "/favorites",
    tag = FAVORITES_TAG,
    responses(
        (status = 200, description = "All favorites in insertion order", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db, state.favorite_policy.matching)
        .get_all_favorites()
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Get a single favorite
#[utoipa::path(
    get,
    path = "/favorites/{id}",
    tag = FAVORITES_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite found", body = FavoriteDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(favorite_id) = path?;

    let service = FavoriteService::new(&state.db, state.favorite_policy.matching);

    let Some(favorite) = service.get_favorite(favorite_id).await? else {
        return Err(RecordError::NotFound {
            record: Record::Favorite,
            id: favorite_id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(favorite)))
}

/// Delete a favorite by its own ID
#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    tag = FAVORITES_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite deleted successfully", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(favorite_id) = path?;

    FavoriteService::new(&state.db, state.favorite_policy.matching)
        .delete_favorite(favorite_id)
        .await?;

    Ok(ok_message("Favorite deleted successfully"))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorites/planet/{user_id}/{planet_id}",
    tag = FAVORITES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "New planet added to user list", body = MessageDto),
        (status = 400, description = "This planet exists in that user favorites list", body = MessageDto),
        (status = 404, description = "User or planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, planet_id)) = path?;

    FavoriteService::new(&state.db, state.favorite_policy.matching)
        .add_favorite(user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok(ok_message("New planet added to user list"))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/planet/{user_id}/{planet_id}",
    tag = FAVORITES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet deleted from user list", body = MessageDto),
        (status = 400, description = "Planet or user not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, planet_id)) = path?;

    FavoriteService::new(&state.db, state.favorite_policy.matching)
        .remove_favorite(user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok(ok_message("Planet deleted from user list"))
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/favorites/character/{user_id}/{character_id}",
    tag = FAVORITES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "New character added to user list", body = MessageDto),
        (status = 400, description = "This character exists in that user favorites list", body = MessageDto),
        (status = 404, description = "User or character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, character_id)) = path?;

    FavoriteService::new(&state.db, state.favorite_policy.matching)
        .add_favorite(user_id, FavoriteTarget::Character(character_id))
        .await?;

    Ok(ok_message("New character added to user list"))
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/character/{user_id}/{character_id}",
    tag = FAVORITES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "character deleted from user list", body = MessageDto),
        (status = 400, description = "character or user not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, character_id)) = path?;

    FavoriteService::new(&state.db, state.favorite_policy.matching)
        .remove_favorite(user_id, FavoriteTarget::Character(character_id))
        .await?;

    Ok(ok_message("character deleted from user list"))
}
