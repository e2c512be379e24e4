//! HTTP controller endpoints for the Holocron API.
//!
//! Axum handlers for users, planets, characters, and favorites. Handlers extract the path
//! and body, call the matching service, and map the outcome onto a status code with a JSON
//! body. Each handler carries a utoipa annotation that feeds the OpenAPI document.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod util;
