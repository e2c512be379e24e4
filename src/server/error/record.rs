use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::MessageDto, server::model::favorite::TargetKind};

/// Table a [`RecordError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    User,
    Planet,
    Character,
    Favorite,
}

impl Record {
    /// Name used in client messages, `character` is lowercase
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Planet => "Planet",
            Self::Character => "character",
            Self::Favorite => "Favorite",
        }
    }
}

impl From<TargetKind> for Record {
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Planet => Self::Planet,
            TargetKind::Character => Self::Character,
        }
    }
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{record:?} ID {id} not found")]
    NotFound { record: Record, id: i32 },
    #[error("{record:?} with natural key {key:?} already exists")]
    AlreadyExists { record: Record, key: String },
    #[error("{record:?} ID {id} is still referenced by {count} favorites")]
    StillReferenced { record: Record, id: i32, count: u64 },
}

impl RecordError {
    /// Message returned to the client
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { record, .. } => format!("{} not found", record.label()),
            Self::AlreadyExists { record, .. } => match record {
                Record::User => "User email already exists".to_string(),
                record => format!("{} already exists", record.label()),
            },
            Self::StillReferenced { record, .. } => {
                format!("{} is still in a favorites list", record.label())
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists { .. } | Self::StillReferenced { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (self.status(), Json(MessageDto::new(self.message()))).into_response()
    }
}
