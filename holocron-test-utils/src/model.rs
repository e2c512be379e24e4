//! Database model type aliases for test utilities, matching those in the main crate.

pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planet::Model;

pub type CharacterModel = entity::character::Model;

pub type FavoriteModel = entity::favorites::Model;
