//! Favorite pairing rules.
//!
//! A favorite links one user to one planet or one character. Adding a favorite is rejected
//! when the pairing already exists and removing one is rejected when it does not; how
//! "exists" is decided depends on [`FavoriteMatching`]:
//!
//! | matching | add rejected when                                   | remove rejected when                       |
//! |----------|-----------------------------------------------------|--------------------------------------------|
//! | `Exact`  | a row has this user ID and this target ID           | no row has this user ID and this target ID |
//! | `Legacy` | the user has any favorite and the target is any user's favorite | the user has no favorite and the target is nobody's favorite |
//!
//! Under `Legacy` a remove that passes the check deletes the exact pairing if there is one
//! and succeeds either way.

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
            user::UserRepository,
        },
        error::{
            favorite::FavoriteError,
            record::{Record, RecordError},
            Error,
        },
        model::favorite::{FavoriteMatching, FavoriteTarget, TargetDeletePolicy},
        service::unique_violation_or,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
    matching: FavoriteMatching,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection, matching: FavoriteMatching) -> Self {
        Self { db, matching }
    }

    pub async fn get_all_favorites(&self) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db).get_all().await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    pub async fn get_favorite(&self, favorite_id: i32) -> Result<Option<FavoriteDto>, Error> {
        let favorite = FavoriteRepository::new(self.db)
            .get_by_id(favorite_id)
            .await?;

        Ok(favorite.map(FavoriteDto::from))
    }

    /// Adds `target` to the user's favorites
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The new favorites row
    /// - `Err(Error::RecordError(RecordError::NotFound))` - User or target does not exist
    /// - `Err(Error::FavoriteError(FavoriteError::AlreadyFavorited))` - Pairing already exists
    ///   according to the configured matching, or the unique index rejected the insert
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        ensure_user_exists(&txn, user_id).await?;
        ensure_target_exists(&txn, target).await?;

        let already_favorited = match self.matching {
            FavoriteMatching::Exact => favorite_repo
                .find_by_user_and_target(user_id, target)
                .await?
                .is_some(),
            FavoriteMatching::Legacy => {
                let by_user = favorite_repo.find_first_by_user(user_id).await?;
                let by_target = favorite_repo.find_first_by_target(target).await?;

                by_user.is_some() && by_target.is_some()
            }
        };

        if already_favorited {
            return Err(FavoriteError::AlreadyFavorited { user_id, target }.into());
        }

        let favorite = favorite_repo
            .create(user_id, target)
            .await
            .map_err(|err| {
                unique_violation_or(err, FavoriteError::AlreadyFavorited { user_id, target })
            })?;

        txn.commit().await?;

        tracing::debug!(
            user_id = user_id,
            favorite_id = favorite.id,
            "Added {} ID {} to favorites",
            target.kind(),
            target.id()
        );

        Ok(favorite.into())
    }

    /// Removes `target` from the user's favorites
    ///
    /// # Returns
    /// - `Ok(true)` - The pairing was deleted
    /// - `Ok(false)` - Only under `Legacy` matching: the coarse check passed but no row links
    ///   this user to this target, nothing was deleted
    /// - `Err(Error::FavoriteError(FavoriteError::NotFavorited))` - Pairing does not exist
    ///   according to the configured matching
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        if self.matching == FavoriteMatching::Legacy {
            let by_user = favorite_repo.find_first_by_user(user_id).await?;
            let by_target = favorite_repo.find_first_by_target(target).await?;

            if by_user.is_none() && by_target.is_none() {
                return Err(FavoriteError::NotFavorited { user_id, target }.into());
            }
        }

        let Some(favorite) = favorite_repo
            .find_by_user_and_target(user_id, target)
            .await?
        else {
            if self.matching == FavoriteMatching::Legacy {
                tracing::debug!(
                    user_id = user_id,
                    "No favorite for {} ID {}, legacy matching reports success without deleting",
                    target.kind(),
                    target.id()
                );

                return Ok(false);
            }

            return Err(FavoriteError::NotFavorited { user_id, target }.into());
        };

        favorite_repo.delete(favorite.id).await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Deletes a favorite by its own ID
    ///
    /// # Returns
    /// - `Ok(())` - Exactly that row was deleted
    /// - `Err(Error::RecordError(RecordError::NotFound))` - No favorite with that ID
    pub async fn delete_favorite(&self, favorite_id: i32) -> Result<(), Error> {
        let result = FavoriteRepository::new(self.db)
            .delete(favorite_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(RecordError::NotFound {
                record: Record::Favorite,
                id: favorite_id,
            }
            .into());
        }

        Ok(())
    }
}

async fn ensure_user_exists(txn: &DatabaseTransaction, user_id: i32) -> Result<(), Error> {
    if UserRepository::new(txn).get_by_id(user_id).await?.is_none() {
        return Err(RecordError::NotFound {
            record: Record::User,
            id: user_id,
        }
        .into());
    }

    Ok(())
}

async fn ensure_target_exists(
    txn: &DatabaseTransaction,
    target: FavoriteTarget,
) -> Result<(), Error> {
    let exists = match target {
        FavoriteTarget::Planet(planet_id) => PlanetRepository::new(txn)
            .get_by_id(planet_id)
            .await?
            .is_some(),
        FavoriteTarget::Character(character_id) => CharacterRepository::new(txn)
            .get_by_id(character_id)
            .await?
            .is_some(),
    };

    if !exists {
        return Err(RecordError::NotFound {
            record: target.kind().into(),
            id: target.id(),
        }
        .into());
    }

    Ok(())
}

/// Applies `policy` to the favorites of a planet or character that is about to be deleted
///
/// Run inside the transaction that deletes the target.
///
/// # Returns
/// - `Ok(())` - The target may be deleted, cascaded favorites are already gone
/// - `Err(Error::RecordError(RecordError::StillReferenced))` - Policy is `Restrict` and at
///   least one favorite points at the target
pub async fn apply_target_delete_policy<C: ConnectionTrait>(
    conn: &C,
    policy: TargetDeletePolicy,
    target: FavoriteTarget,
) -> Result<(), Error> {
    let favorite_repo = FavoriteRepository::new(conn);

    match policy {
        TargetDeletePolicy::Orphan => {}
        TargetDeletePolicy::Cascade => {
            let removed = favorite_repo.delete_many_by_target(target).await?;

            tracing::debug!(
                favorites_removed = removed.rows_affected,
                "Cascaded delete of {} ID {}",
                target.kind(),
                target.id()
            );
        }
        TargetDeletePolicy::Restrict => {
            let count = favorite_repo.count_by_target(target).await?;
            if count > 0 {
                return Err(RecordError::StillReferenced {
                    record: target.kind().into(),
                    id: target.id(),
                    count,
                }
                .into());
            }
        }
    }

    Ok(())
}
