use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    db::FavoriteModel,
    favorite::{FavoriteTarget, TargetKind},
};

/// Column holding the target ID for the provided kind
fn target_column(kind: TargetKind) -> entity::favorites::Column {
    match kind {
        TargetKind::Planet => entity::favorites::Column::IdPlanet,
        TargetKind::Character => entity::favorites::Column::IdCharacter,
    }
}

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new favorites row with only the column for `target` set
    ///
    /// Always inserts, existing rows for the user are never merged or updated.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let (id_planet, id_character) = match target {
            FavoriteTarget::Planet(planet_id) => (Some(planet_id), None),
            FavoriteTarget::Character(character_id) => (None, Some(character_id)),
        };

        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            id_planet: ActiveValue::Set(id_planet),
            id_character: ActiveValue::Set(id_character),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Returns all favorites in insertion order
    pub async fn get_all(&self) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// First favorite of any kind owned by the user
    pub async fn find_first_by_user(&self, user_id: i32) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorites::Column::Id)
            .one(self.db)
            .await
    }

    /// First favorite pointing at the target, regardless of which user owns it
    pub async fn find_first_by_target(
        &self,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(target_column(target.kind()).eq(target.id()))
            .order_by_asc(entity::favorites::Column::Id)
            .one(self.db)
            .await
    }

    /// The favorite linking exactly this user to exactly this target
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(target_column(target.kind()).eq(target.id()))
            .order_by_asc(entity::favorites::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_user(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_target(
        &self,
        target: FavoriteTarget,
    ) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(target_column(target.kind()).eq(target.id()))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_target(&self, target: FavoriteTarget) -> Result<u64, DbErr> {
        entity::prelude::Favorites::find()
            .filter(target_column(target.kind()).eq(target.id()))
            .count(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_many_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_many_by_target(
        &self,
        target: FavoriteTarget,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(target_column(target.kind()).eq(target.id()))
            .exec(self.db)
            .await
    }
}
