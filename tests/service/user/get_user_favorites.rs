//! Tests for UserService::get_user_favorites.

use holocron::server::{
    error::{record::RecordError, Error},
    service::user::UserService,
};
use holocron_test_utils::prelude::*;

/// Expected: Ok with only the favorites owned by that user
#[tokio::test]
async fn returns_only_own_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("a@x.com")
        .with_user("b@x.com")
        .with_planet("Tatooine")
        .with_character("Leia Organa")
        .build()
        .await?;
    let planet_fav = test.favorite().insert_planet_favorite(1, 1).await?;
    let character_fav = test.favorite().insert_character_favorite(1, 1).await?;
    test.favorite().insert_planet_favorite(2, 1).await?;

    let favorites = UserService::new(&test.db)
        .get_user_favorites(1)
        .await
        .unwrap();

    let ids: Vec<_> = favorites.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![planet_fav.id, character_fav.id]);

    Ok(())
}

/// Expected: Err with NotFound
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = UserService::new(&test.db).get_user_favorites(1).await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::NotFound { .. }))
    ));

    Ok(())
}
