use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::MessageDto, server::model::favorite::FavoriteTarget};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {user_id} already has {target:?} in favorites")]
    AlreadyFavorited {
        user_id: i32,
        target: FavoriteTarget,
    },
    #[error("User ID {user_id} has no favorite for {target:?}")]
    NotFavorited {
        user_id: i32,
        target: FavoriteTarget,
    },
}

impl FavoriteError {
    /// Message returned to the client
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyFavorited { target, .. } => {
                format!("This {} exists in that user favorites list", target.kind())
            }
            Self::NotFavorited { target, .. } => match target {
                FavoriteTarget::Planet(_) => "Planet or user not found".to_string(),
                FavoriteTarget::Character(_) => "character or user not found".to_string(),
            },
        }
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::BAD_REQUEST, Json(MessageDto::new(self.message()))).into_response()
    }
}
