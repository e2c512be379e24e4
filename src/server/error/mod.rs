//! Error types for the Holocron server.
//!
//! Domain errors are split by concern (configuration, record lookups/uniqueness, favorites)
//! and aggregated into [`Error`]. Every error implements `IntoResponse`, so handlers can
//! return `Result<_, Error>` and no failure leaves the HTTP boundary without being turned
//! into a JSON `{ "msg": ... }` body with a status code.

pub mod config;
pub mod favorite;
pub mod record;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{config::ConfigError, favorite::FavoriteError, record::RecordError},
};

/// Main error type for the Holocron server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Record errors (missing rows, duplicate natural keys, restricted deletes)
/// - Favorite errors (duplicate or missing user/target pairings)
/// - Malformed request bodies
/// - External library errors (database, socket I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Lookup or uniqueness failure for a user, planet, character, or favorite.
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Favorite pairing rule violation.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Request body or URL parameters could not be parsed into the expected shape.
    #[error("Invalid request body: {0}")]
    BadRequest(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Socket error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Maps errors to status codes with a `MessageDto` body.
///
/// # Returns
/// - 400 Bad Request - Duplicate records, favorite rule violations, malformed bodies
/// - 404 Not Found - Missing records
/// - 500 Internal Server Error - Everything else (logged, generic message to the client)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::RecordError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::BadRequest(reason) => {
                tracing::debug!("Rejected request: {}", reason);

                (StatusCode::BAD_REQUEST, Json(MessageDto::new(reason))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged in full while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
