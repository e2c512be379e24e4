//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa specification. Swagger UI is
//! served at `/docs` and the generated document at `/docs/openapi.json`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Routes sharing a path are grouped in a single `routes!` call so utoipa-axum can merge their
/// methods onto one axum route. Request tracing and permissive CORS are applied to every route,
/// including the documentation.
///
/// # Returns
/// A `Router<AppState>` that still needs its state, see [`crate::server::startup::serve`].
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, FavoritePolicy::default()));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::favorite::FAVORITES_TAG, description = "Favorites API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::planet::get_planet_favorites))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::delete_character
        ))
        .routes(routes!(controller::character::get_character_favorites))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(
            controller::favorite::get_favorite,
            controller::favorite::delete_favorite
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
