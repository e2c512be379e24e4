//! Tests for FavoriteService::add_favorite under both matching modes.

use holocron::server::{
    error::{favorite::FavoriteError, record::RecordError, Error},
    model::favorite::{FavoriteMatching, FavoriteTarget},
    service::favorite::FavoriteService,
};
use holocron_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Two users, two planets, one character, no favorites
async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .with_user("b@x.com")
        .with_planet("Tatooine")
        .with_planet("Hoth")
        .with_character("Luke Skywalker")
        .build()
        .await
}

/// Expected: Ok with a row that has only `id_planet` set
#[tokio::test]
async fn adds_planet_favorite() -> Result<(), TestError> {
    let test = setup().await?;

    let result = FavoriteService::new(&test.db, FavoriteMatching::Exact)
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await;

    let favorite = result.unwrap();
    assert_eq!(favorite.user_id, 1);
    assert_eq!(favorite.id_planet, Some(1));
    assert_eq!(favorite.id_character, None);

    Ok(())
}

/// Expected: Ok with a row that has only `id_character` set
#[tokio::test]
async fn adds_character_favorite() -> Result<(), TestError> {
    let test = setup().await?;

    let result = FavoriteService::new(&test.db, FavoriteMatching::Exact)
        .add_favorite(1, FavoriteTarget::Character(1))
        .await;

    let favorite = result.unwrap();
    assert_eq!(favorite.id_planet, None);
    assert_eq!(favorite.id_character, Some(1));

    Ok(())
}

/// Expected: second add fails with AlreadyFavorited, one row stored
#[tokio::test]
async fn exact_rejects_same_pairing_twice() -> Result<(), TestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db, FavoriteMatching::Exact);

    favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await
        .unwrap();
    let result = favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::AlreadyFavorited { .. }))
    ));
    assert_eq!(
        entity::prelude::Favorites::find().all(&test.db).await?.len(),
        1
    );

    Ok(())
}

/// A user with any favorite adding a target another user already favorited.
///
/// Expected: Exact accepts it, Legacy rejects it
#[tokio::test]
async fn coarse_check_only_applies_to_legacy() -> Result<(), TestError> {
    let test = setup().await?;
    test.favorite().insert_planet_favorite(1, 2).await?;
    test.favorite().insert_planet_favorite(2, 1).await?;

    let legacy = FavoriteService::new(&test.db, FavoriteMatching::Legacy)
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await;
    assert!(matches!(
        legacy,
        Err(Error::FavoriteError(FavoriteError::AlreadyFavorited { .. }))
    ));

    let exact = FavoriteService::new(&test.db, FavoriteMatching::Exact)
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await;
    assert!(exact.is_ok());

    Ok(())
}

/// Expected: Legacy accepts a first favorite, then rejects the identical pairing
#[tokio::test]
async fn legacy_rejects_repeated_pairing() -> Result<(), TestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db, FavoriteMatching::Legacy);

    favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await
        .unwrap();
    let result = favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::AlreadyFavorited { .. }))
    ));

    Ok(())
}

/// The same planet ID favorited as a character is a different pairing.
///
/// Expected: Ok
#[tokio::test]
async fn planet_and_character_with_same_id_are_distinct() -> Result<(), TestError> {
    let test = setup().await?;
    let favorite_service = FavoriteService::new(&test.db, FavoriteMatching::Exact);

    favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await
        .unwrap();
    let result = favorite_service
        .add_favorite(1, FavoriteTarget::Character(1))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Expected: Err with NotFound for the user
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = setup().await?;

    let result = FavoriteService::new(&test.db, FavoriteMatching::Exact)
        .add_favorite(99, FavoriteTarget::Planet(1))
        .await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::NotFound { id: 99, .. }))
    ));

    Ok(())
}

/// Expected: Err with NotFound for the target, nothing stored
#[tokio::test]
async fn fails_for_nonexistent_target() -> Result<(), TestError> {
    let test = setup().await?;

    let result = FavoriteService::new(&test.db, FavoriteMatching::Exact)
        .add_favorite(1, FavoriteTarget::Character(42))
        .await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::NotFound { id: 42, .. }))
    ));
    assert!(entity::prelude::Favorites::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}
