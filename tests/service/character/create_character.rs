//! Tests for CharacterService::create_character and lookups.

use holocron::{
    model::character::CreateCharacterDto,
    server::{
        error::{record::RecordError, Error},
        model::favorite::TargetDeletePolicy,
        service::character::CharacterService,
    },
};
use holocron_test_utils::prelude::*;

fn luke() -> CreateCharacterDto {
    CreateCharacterDto {
        name: "Luke Skywalker".to_string(),
    }
}

/// Expected: Ok, and the character can be fetched back
#[tokio::test]
async fn creates_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let character_service = CharacterService::new(&test.db, TargetDeletePolicy::default());

    let created = character_service.create_character(luke()).await.unwrap();
    let fetched = character_service.get_character(created.id).await.unwrap();

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Expected: Err with AlreadyExists
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_character("Luke Skywalker")
        .build()
        .await?;

    let result = CharacterService::new(&test.db, TargetDeletePolicy::default())
        .create_character(luke())
        .await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::AlreadyExists { .. }))
    ));

    Ok(())
}

/// Expected: Ok with characters in insertion order
#[tokio::test]
async fn lists_characters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_character("Luke Skywalker")
        .with_character("Han Solo")
        .build()
        .await?;

    let characters = CharacterService::new(&test.db, TargetDeletePolicy::default())
        .get_all_characters()
        .await
        .unwrap();

    let names: Vec<_> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Luke Skywalker", "Han Solo"]);

    Ok(())
}
