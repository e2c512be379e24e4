//! Request and response bodies shared by the HTTP layer.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
