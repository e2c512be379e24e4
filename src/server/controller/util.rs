use axum::{http::StatusCode, Json};

use crate::model::api::MessageDto;

/// 200 OK with a `{ "msg": ... }` body
pub fn ok_message(msg: &str) -> (StatusCode, Json<MessageDto>) {
    (StatusCode::OK, Json(MessageDto::new(msg)))
}
