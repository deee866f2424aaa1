//! Create `acronym` table with FK to `user`.
//!
//! Deleting a user that still owns acronyms is refused by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Acronym::Table)
                    .if_not_exists()
                    .col(pk_auto(Acronym::Id))
                    .col(text(Acronym::Short))
                    .col(text(Acronym::Long))
                    .col(integer(Acronym::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_acronym_user")
                            .from(Acronym::Table, Acronym::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Acronym::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Acronym { Table, Id, Short, Long, UserId }

#[derive(DeriveIden)]
enum User { Table, Id }
