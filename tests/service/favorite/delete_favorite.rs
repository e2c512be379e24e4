//! Tests for FavoriteService::delete_favorite and lookups by ID.

use holocron::server::{
    error::{record::RecordError, Error},
    model::favorite::FavoriteMatching,
    service::favorite::FavoriteService,
};
use holocron_test_utils::prelude::*;

/// Expected: Ok, and the favorite can no longer be fetched
#[tokio::test]
async fn deletes_favorite_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .with_planet("Tatooine")
        .build()
        .await?;
    let favorite = test.favorite().insert_planet_favorite(1, 1).await?;
    let favorite_service = FavoriteService::new(&test.db, FavoriteMatching::default());

    assert!(favorite_service
        .get_favorite(favorite.id)
        .await
        .unwrap()
        .is_some());

    let result = favorite_service.delete_favorite(favorite.id).await;

    assert!(result.is_ok());
    assert!(favorite_service
        .get_favorite(favorite.id)
        .await
        .unwrap()
        .is_none());

    Ok(())
}

/// Expected: Err with NotFound
#[tokio::test]
async fn fails_for_nonexistent_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = FavoriteService::new(&test.db, FavoriteMatching::default())
        .delete_favorite(1)
        .await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::NotFound { .. }))
    ));

    Ok(())
}

/// Rows with both or neither target column set are listed as stored.
///
/// Expected: Ok with every row in insertion order
#[tokio::test]
async fn lists_irregular_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .build()
        .await?;
    let both = test.favorite().insert_favorite(1, Some(1), Some(1)).await?;
    let neither = test.favorite().insert_favorite(1, None, None).await?;

    let favorites = FavoriteService::new(&test.db, FavoriteMatching::default())
        .get_all_favorites()
        .await
        .unwrap();

    let ids: Vec<_> = favorites.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![both.id, neither.id]);

    Ok(())
}
