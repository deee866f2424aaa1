use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};
use tracing::{info, instrument};

use models::{acronym, user};
use crate::errors::ServiceError;

/// List every user.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    Ok(user::Entity::find().all(db).await?)
}

/// Create a new user.
#[instrument(skip(db))]
pub async fn create_user(db: &DatabaseConnection, name: &str, username: &str) -> Result<user::Model, ServiceError> {
    let created = user::create(db, name, username).await?;
    info!(id = created.id, "created user");
    Ok(created)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("user"))
}

/// Acronyms owned by user `id`; empty when the user has none.
pub async fn list_user_acronyms(db: &DatabaseConnection, id: i32) -> Result<Vec<acronym::Model>, ServiceError> {
    let owner = get_user(db, id).await?;
    let rows = owner
        .find_related(acronym::Entity)
        .order_by_asc(acronym::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
