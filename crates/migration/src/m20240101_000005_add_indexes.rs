use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Acronym: owner lookups (/users/{id}/acronyms)
        manager
            .create_index(
                Index::create()
                    .name("idx_acronym_user")
                    .table(Acronym::Table)
                    .col(Acronym::UserId)
                    .to_owned(),
            )
            .await?;

        // Acronym: search and sorted listing
        manager
            .create_index(
                Index::create()
                    .name("idx_acronym_short")
                    .table(Acronym::Table)
                    .col(Acronym::Short)
                    .to_owned(),
            )
            .await?;

        // Pivot: reverse traversal category -> acronyms
        manager
            .create_index(
                Index::create()
                    .name("idx_pivot_category")
                    .table(AcronymCategoryPivot::Table)
                    .col(AcronymCategoryPivot::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_acronym_user").table(Acronym::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_acronym_short").table(Acronym::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_pivot_category").table(AcronymCategoryPivot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Acronym { Table, UserId, Short }

#[derive(DeriveIden)]
enum AcronymCategoryPivot { Table, CategoryId }
