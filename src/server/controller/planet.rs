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
        favorite::FavoriteDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        controller::util::ok_message,
        error::{
            record::{Record, RecordError},
            Error,
        },
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets in insertion order", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db, state.favorite_policy.on_target_delete)
        .get_all_planets()
        .await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;

    let service = PlanetService::new(&state.db, state.favorite_policy.on_target_delete);

    let Some(planet) = service.get_planet(planet_id).await? else {
        return Err(RecordError::NotFound {
            record: Record::Planet,
            id: planet_id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet, names must be unique
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "New planet created", body = MessageDto),
        (status = 400, description = "Planet already exists or body is invalid", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(planet) = payload?;

    PlanetService::new(&state.db, state.favorite_policy.on_target_delete)
        .create_planet(planet)
        .await?;

    Ok(ok_message("New planet created"))
}

/// Delete a planet, favorites pointing at it are handled by the configured delete policy
#[utoipa::path(
    delete,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted successfully", body = MessageDto),
        (status = 400, description = "Planet is still in a favorites list", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;

    PlanetService::new(&state.db, state.favorite_policy.on_target_delete)
        .delete_planet(planet_id)
        .await?;

    Ok(ok_message("Planet deleted successfully"))
}

/// List every favorite pointing at a planet
#[utoipa::path(
    get,
    path = "/planet/{id}/favorites",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Favorites for the planet", body = Vec<FavoriteDto>),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;

    let favorites = PlanetService::new(&state.db, state.favorite_policy.on_target_delete)
        .get_planet_favorites(planet_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
