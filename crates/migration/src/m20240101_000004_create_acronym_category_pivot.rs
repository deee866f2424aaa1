//! Create `acronym_category_pivot` association table.
//!
//! One row per (acronym, category) edge; the composite primary key rules out
//! duplicate edges. Rows follow either endpoint on delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcronymCategoryPivot::Table)
                    .if_not_exists()
                    .col(integer(AcronymCategoryPivot::AcronymId))
                    .col(integer(AcronymCategoryPivot::CategoryId))
                    .primary_key(
                        Index::create()
                            .name("pk_acronym_category_pivot")
                            .col(AcronymCategoryPivot::AcronymId)
                            .col(AcronymCategoryPivot::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pivot_acronym")
                            .from(AcronymCategoryPivot::Table, AcronymCategoryPivot::AcronymId)
                            .to(Acronym::Table, Acronym::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pivot_category")
                            .from(AcronymCategoryPivot::Table, AcronymCategoryPivot::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AcronymCategoryPivot::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AcronymCategoryPivot { Table, AcronymId, CategoryId }

#[derive(DeriveIden)]
enum Acronym { Table, Id }

#[derive(DeriveIden)]
enum Category { Table, Id }
