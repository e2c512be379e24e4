//! Declarative test builder.
//!
//! Configuration methods only queue work; tables are created and fixture rows are inserted
//! when `build()` is awaited.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    users: Vec<String>,
    planets: Vec<String>,
    characters: Vec<String>,
}

impl TestBuilder {
    /// Create a new builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Create the `user`, `planet`, `character`, and `favorites` tables, plus the unique
    /// (user, target) indexes on `favorites` that the migrations add.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table, created after the tables from `with_all_tables`.
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Planet).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided email. Users get IDs in the order they are queued.
    pub fn with_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Insert a planet with the provided name.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a character with the provided name.
    pub fn with_character(mut self, name: &str) -> Self {
        self.characters.push(name.to_string());
        self
    }

    /// Create tables, then insert queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend([
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Favorites),
            ]);
        }
        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        if self.include_all_tables {
            test.with_indexes(favorites_unique_indexes()).await?;
        }

        for email in &self.users {
            test.user().insert_user(email).await?;
        }

        for name in &self.planets {
            test.planet().insert_planet(name).await?;
        }

        for name in &self.characters {
            test.character().insert_character(name).await?;
        }

        Ok(test)
    }
}

/// Composite unique indexes the entity definitions cannot express.
fn favorites_unique_indexes() -> Vec<IndexCreateStatement> {
    use entity::favorites::Column;

    [
        ("uq_favorites_user_id_id_planet", Column::IdPlanet),
        ("uq_favorites_user_id_id_character", Column::IdCharacter),
    ]
    .into_iter()
    .map(|(name, target)| {
        Index::create()
            .name(name)
            .table(entity::prelude::Favorites)
            .col(Column::UserId)
            .col(target)
            .unique()
            .to_owned()
    })
    .collect()
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
