use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};
use tracing::{info, instrument};

use models::{acronym, category};
use crate::errors::ServiceError;

/// List every category.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>, ServiceError> {
    Ok(category::Entity::find().all(db).await?)
}

/// Create a category.
#[instrument(skip(db))]
pub async fn create_category(db: &DatabaseConnection, name: &str) -> Result<category::Model, ServiceError> {
    let created = category::create(db, name).await?;
    info!(id = created.id, "created category");
    Ok(created)
}

/// Get a category by id.
pub async fn get_category(db: &DatabaseConnection, id: i32) -> Result<category::Model, ServiceError> {
    category::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("category"))
}

/// Acronyms tagged with category `id`.
pub async fn list_category_acronyms(db: &DatabaseConnection, id: i32) -> Result<Vec<acronym::Model>, ServiceError> {
    let found = get_category(db, id).await?;
    let rows = found
        .find_related(acronym::Entity)
        .order_by_asc(acronym::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
