use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        favorite::FavoriteDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        data::{favorite::FavoriteRepository, planet::PlanetRepository},
        error::{
            record::{Record, RecordError},
            Error,
        },
        model::favorite::{FavoriteTarget, TargetDeletePolicy},
        service::{favorite::apply_target_delete_policy, unique_violation_or},
    },
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
    on_delete: TargetDeletePolicy,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `on_delete` - What happens to favorites of a planet when it is deleted
    pub fn new(db: &'a DatabaseConnection, on_delete: TargetDeletePolicy) -> Self {
        Self { db, on_delete }
    }

    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }

    /// Creates a planet unless one with the same name exists
    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);
        let already_exists = RecordError::AlreadyExists {
            record: Record::Planet,
            key: planet.name.clone(),
        };

        if planet_repo.find_by_name(&planet.name).await?.is_some() {
            return Err(already_exists.into());
        }

        let created = planet_repo
            .create(planet.name)
            .await
            .map_err(|err| unique_violation_or(err, already_exists))?;

        txn.commit().await?;

        Ok(created.into())
    }

    /// Deletes a planet, applying the configured [`TargetDeletePolicy`] to its favorites
    ///
    /// # Returns
    /// - `Ok(())` - Planet deleted
    /// - `Err(Error::RecordError(RecordError::NotFound))` - No planet with that ID
    /// - `Err(Error::RecordError(RecordError::StillReferenced))` - Policy is `Restrict` and
    ///   at least one favorite points at the planet
    pub async fn delete_planet(&self, planet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        if planet_repo.get_by_id(planet_id).await?.is_none() {
            return Err(RecordError::NotFound {
                record: Record::Planet,
                id: planet_id,
            }
            .into());
        }

        apply_target_delete_policy(&txn, self.on_delete, FavoriteTarget::Planet(planet_id)).await?;
        planet_repo.delete(planet_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Lists every favorite pointing at the planet
    pub async fn get_planet_favorites(&self, planet_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        if PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(RecordError::NotFound {
                record: Record::Planet,
                id: planet_id,
            }
            .into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_target(FavoriteTarget::Planet(planet_id))
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}
