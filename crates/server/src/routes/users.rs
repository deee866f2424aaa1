use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::{acronym, user};
use service::user_service;

use super::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserInput {
    pub name: String,
    pub username: String,
}

#[utoipa::path(get, path = "/api/users", tag = "users",
    responses((status = 200, description = "All users", body = [crate::openapi::UserDoc])))]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    let list = user_service::list_users(&state.db).await?;
    info!(count = list.len(), "list users");
    Ok(Json(list))
}

#[utoipa::path(post, path = "/api/users", tag = "users", request_body = UserInput,
    responses((status = 200, description = "Created", body = crate::openapi::UserDoc)))]
pub async fn create_user(State(state): State<ServerState>, Json(input): Json<UserInput>) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(user_service::create_user(&state.db, &input.name, &input.username).await?))
}

#[utoipa::path(get, path = "/api/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::UserDoc),
        (status = 404, description = "Not found")
    ))]
pub async fn get_user(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(user_service::get_user(&state.db, id).await?))
}

#[utoipa::path(get, path = "/api/users/{id}/acronyms", tag = "users", params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Acronyms owned by the user", body = [crate::openapi::AcronymDoc]),
        (status = 404, description = "Not found")
    ))]
pub async fn list_user_acronyms(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Vec<acronym::Model>>, JsonApiError> {
    Ok(Json(user_service::list_user_acronyms(&state.db, id).await?))
}
