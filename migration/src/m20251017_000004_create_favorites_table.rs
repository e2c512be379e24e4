use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_create_user_table::User;

static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";
static IDX_FAVORITES_ID_PLANET: &str = "idx_favorites_id_planet";
static IDX_FAVORITES_ID_CHARACTER: &str = "idx_favorites_id_character";
static UQ_FAVORITES_USER_PLANET: &str = "uq_favorites_user_id_id_planet";
static UQ_FAVORITES_USER_CHARACTER: &str = "uq_favorites_user_id_id_character";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::IdPlanet))
                    .col(integer_null(Favorites::IdCharacter))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_USER_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_ID_PLANET)
                    .table(Favorites::Table)
                    .col(Favorites::IdPlanet)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_ID_CHARACTER)
                    .table(Favorites::Table)
                    .col(Favorites::IdCharacter)
                    .to_owned(),
            )
            .await?;

        // NULL target columns never collide, so planet and character rows coexist.
        manager
            .create_index(
                Index::create()
                    .name(UQ_FAVORITES_USER_PLANET)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::IdPlanet)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_FAVORITES_USER_CHARACTER)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::IdCharacter)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in [
            UQ_FAVORITES_USER_CHARACTER,
            UQ_FAVORITES_USER_PLANET,
            IDX_FAVORITES_ID_CHARACTER,
            IDX_FAVORITES_ID_PLANET,
        ] {
            manager
                .drop_index(Index::drop().name(index).table(Favorites::Table).to_owned())
                .await?;
        }

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    UserId,
    Id,
    IdPlanet,
    IdCharacter,
}
