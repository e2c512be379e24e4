use sea_orm::DatabaseConnection;

use crate::server::model::favorite::FavoritePolicy;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub favorite_policy: FavoritePolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, favorite_policy: FavoritePolicy) -> Self {
        Self {
            db,
            favorite_policy,
        }
    }
}

/// Builds state with the default [`FavoritePolicy`]
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, FavoritePolicy::default())
    }
}
