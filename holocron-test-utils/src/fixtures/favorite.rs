use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::FavoriteModel, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { context: self }
    }
}

pub struct FavoriteFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, Some(planet_id), None).await
    }

    pub async fn insert_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, None, Some(character_id))
            .await
    }

    /// Insert a row with arbitrary target columns, including both or neither set
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        id_planet: Option<i32>,
        id_character: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorites::insert(entity::favorites::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                id_planet: ActiveValue::Set(id_planet),
                id_character: ActiveValue::Set(id_character),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
