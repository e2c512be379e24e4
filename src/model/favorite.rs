use serde::{Deserialize, Serialize};

/// A single favorites row, exactly one of `id_planet` / `id_character` is set for rows
/// created through the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub id_planet: Option<i32>,
    pub id_character: Option<i32>,
}

impl From<entity::favorites::Model> for FavoriteDto {
    fn from(favorite: entity::favorites::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            id_planet: favorite.id_planet,
            id_character: favorite.id_character,
        }
    }
}
