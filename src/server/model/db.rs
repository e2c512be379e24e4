//! Database model type aliases.
//!
//! Short names for the sea-orm models generated in the `entity` crate so that signatures
//! across repositories and services stay readable.

/// A user account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username`, `name`, `lastname` - Optional profile fields
/// - `password` - Stored as given, never serialized in responses
/// - `email` - Unique business key
pub type UserModel = entity::user::Model;

/// A planet that users can favorite, `name` is unique.
pub type PlanetModel = entity::planet::Model;

/// A character that users can favorite, `name` is unique.
pub type CharacterModel = entity::character::Model;

/// A favorites row linking a user to a planet or a character.
///
/// # Fields (from `entity::favorites::Model`)
/// - `id` - Primary key
/// - `user_id` - Owning user, rows are removed along with the user
/// - `id_planet` - Favorited planet, if this is a planet favorite
/// - `id_character` - Favorited character, if this is a character favorite
pub type FavoriteModel = entity::favorites::Model;
