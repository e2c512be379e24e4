use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        character::{CharacterDto, CreateCharacterDto},
        favorite::FavoriteDto,
    },
    server::{
        data::{character::CharacterRepository, favorite::FavoriteRepository},
        error::{
            record::{Record, RecordError},
            Error,
        },
        model::favorite::{FavoriteTarget, TargetDeletePolicy},
        service::{favorite::apply_target_delete_policy, unique_violation_or},
    },
};

/// Service for the character catalog, mirrors [`PlanetService`](super::planet::PlanetService)
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    on_delete: TargetDeletePolicy,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection, on_delete: TargetDeletePolicy) -> Self {
        Self { db, on_delete }
    }

    pub async fn get_all_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?;

        Ok(character.map(CharacterDto::from))
    }

    /// Creates a character unless one with the same name exists
    pub async fn create_character(
        &self,
        character: CreateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let txn = self.db.begin().await?;
        let character_repo = CharacterRepository::new(&txn);
        let already_exists = RecordError::AlreadyExists {
            record: Record::Character,
            key: character.name.clone(),
        };

        if character_repo.find_by_name(&character.name).await?.is_some() {
            return Err(already_exists.into());
        }

        let created = character_repo
            .create(character.name)
            .await
            .map_err(|err| unique_violation_or(err, already_exists))?;

        txn.commit().await?;

        Ok(created.into())
    }

    /// Deletes a character, applying the configured [`TargetDeletePolicy`] to its favorites
    pub async fn delete_character(&self, character_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let character_repo = CharacterRepository::new(&txn);

        if character_repo.get_by_id(character_id).await?.is_none() {
            return Err(RecordError::NotFound {
                record: Record::Character,
                id: character_id,
            }
            .into());
        }

        apply_target_delete_policy(&txn, self.on_delete, FavoriteTarget::Character(character_id))
            .await?;
        character_repo.delete(character_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Lists every favorite pointing at the character
    pub async fn get_character_favorites(
        &self,
        character_id: i32,
    ) -> Result<Vec<FavoriteDto>, Error> {
        if CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(RecordError::NotFound {
                record: Record::Character,
                id: character_id,
            }
            .into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_target(FavoriteTarget::Character(character_id))
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}
