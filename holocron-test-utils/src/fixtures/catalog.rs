use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn planet(&self) -> PlanetFixtures<'_> {
        PlanetFixtures { context: self }
    }

    pub fn character(&self) -> CharacterFixtures<'_> {
        CharacterFixtures { context: self }
    }
}

pub struct PlanetFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> PlanetFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

pub struct CharacterFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> CharacterFixtures<'a> {
    pub async fn insert_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
