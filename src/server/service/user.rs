use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        favorite::FavoriteDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        data::{
            favorite::FavoriteRepository,
            user::{NewUser, UserRepository},
        },
        error::{
            record::{Record, RecordError},
            Error,
        },
        service::unique_violation_or,
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every user in insertion order
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Creates a user unless another user already has the same email
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::RecordError(RecordError::AlreadyExists))` - Email is taken, either seen by
    ///   the lookup or reported by the unique index when a concurrent request won the race
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_email(&user.email).await?.is_some() {
            return Err(RecordError::AlreadyExists {
                record: Record::User,
                key: user.email,
            }
            .into());
        }

        let already_exists = RecordError::AlreadyExists {
            record: Record::User,
            key: user.email.clone(),
        };
        let created = user_repo
            .create(NewUser {
                username: user.username,
                name: user.name,
                lastname: user.lastname,
                password: user.password,
                email: user.email,
            })
            .await
            .map_err(|err| unique_violation_or(err, already_exists))?;

        txn.commit().await?;

        tracing::debug!(user_id = created.id, "Created user");

        Ok(created.into())
    }

    /// Deletes a user together with all of their favorites
    ///
    /// # Returns
    /// - `Ok(())` - User and favorites deleted
    /// - `Err(Error::RecordError(RecordError::NotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(RecordError::NotFound {
                record: Record::User,
                id: user_id,
            }
            .into());
        }

        let removed = FavoriteRepository::new(&txn)
            .delete_many_by_user(user_id)
            .await?;
        user_repo.delete(user_id).await?;

        txn.commit().await?;

        tracing::debug!(
            user_id = user_id,
            favorites_removed = removed.rows_affected,
            "Deleted user"
        );

        Ok(())
    }

    /// Lists the favorites owned by a user
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(RecordError::NotFound {
                record: Record::User,
                id: user_id,
            }
            .into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}
