//! Holocron: a REST backend for users, planets, characters, and each user's favorites.

pub mod model;
pub mod server;
