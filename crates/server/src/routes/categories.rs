use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use models::{acronym, category};
use service::category_service;

use super::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryInput {
    pub name: String,
}

#[utoipa::path(get, path = "/api/categories", tag = "categories",
    responses((status = 200, description = "All categories", body = [crate::openapi::CategoryDoc])))]
pub async fn list_categories(State(state): State<ServerState>) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    Ok(Json(category_service::list_categories(&state.db).await?))
}

#[utoipa::path(post, path = "/api/categories", tag = "categories", request_body = CategoryInput,
    responses((status = 200, description = "Created", body = crate::openapi::CategoryDoc)))]
pub async fn create_category(
    State(state): State<ServerState>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(category_service::create_category(&state.db, &input.name).await?))
}

#[utoipa::path(get, path = "/api/categories/{id}", tag = "categories", params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::CategoryDoc),
        (status = 404, description = "Not found")
    ))]
pub async fn get_category(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(category_service::get_category(&state.db, id).await?))
}

#[utoipa::path(get, path = "/api/categories/{id}/acronyms", tag = "categories", params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Acronyms tagged with the category", body = [crate::openapi::AcronymDoc]),
        (status = 404, description = "Not found")
    ))]
pub async fn list_category_acronyms(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<acronym::Model>>, JsonApiError> {
    Ok(Json(category_service::list_category_acronyms(&state.db, id).await?))
}
