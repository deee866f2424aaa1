use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use models::{acronym, category, user};
use service::{acronym_service, errors::ServiceError};

use super::ServerState;
use crate::errors::JsonApiError;

/// Request body for create and replace.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AcronymInput {
    pub short: String,
    pub long: String,
    #[serde(rename = "userID")]
    pub user_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched exactly against `short` or `long`.
    pub term: Option<String>,
}

#[utoipa::path(get, path = "/api/acronyms", tag = "acronyms",
    responses((status = 200, description = "All acronyms", body = [crate::openapi::AcronymDoc])))]
pub async fn list_acronyms(State(state): State<ServerState>) -> Result<Json<Vec<acronym::Model>>, JsonApiError> {
    let list = acronym_service::list_acronyms(&state.db).await?;
    info!(count = list.len(), "list acronyms");
    Ok(Json(list))
}

#[utoipa::path(post, path = "/api/acronyms", tag = "acronyms", request_body = AcronymInput,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AcronymDoc),
        (status = 400, description = "Unknown userID")
    ))]
pub async fn create_acronym(
    State(state): State<ServerState>,
    Json(input): Json<AcronymInput>,
) -> Result<Json<acronym::Model>, JsonApiError> {
    let created = acronym_service::create_acronym(&state.db, &input.short, &input.long, input.user_id).await?;
    Ok(Json(created))
}

#[utoipa::path(get, path = "/api/acronyms/{id}", tag = "acronyms", params(("id" = i32, Path, description = "Acronym id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::AcronymDoc),
        (status = 404, description = "Not found")
    ))]
pub async fn get_acronym(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<acronym::Model>, JsonApiError> {
    Ok(Json(acronym_service::get_acronym(&state.db, id).await?))
}

#[utoipa::path(put, path = "/api/acronyms/{id}", tag = "acronyms", request_body = AcronymInput,
    params(("id" = i32, Path, description = "Acronym id")),
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::AcronymDoc),
        (status = 400, description = "Unknown userID"),
        (status = 404, description = "Not found")
    ))]
pub async fn update_acronym(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<AcronymInput>,
) -> Result<Json<acronym::Model>, JsonApiError> {
    let updated = acronym_service::update_acronym(&state.db, id, &input.short, &input.long, input.user_id).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/acronyms/{id}", tag = "acronyms", params(("id" = i32, Path, description = "Acronym id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete_acronym(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    acronym_service::delete_acronym(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/api/acronyms/search", tag = "acronyms", params(SearchQuery),
    responses(
        (status = 200, description = "Exact matches", body = [crate::openapi::AcronymDoc]),
        (status = 400, description = "Missing term")
    ))]
pub async fn search_acronyms(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<acronym::Model>>, JsonApiError> {
    let term = q.term.ok_or_else(|| ServiceError::BadRequest("missing search term".into()))?;
    Ok(Json(acronym_service::search_acronyms(&state.db, &term).await?))
}

#[utoipa::path(get, path = "/api/acronyms/first", tag = "acronyms",
    responses(
        (status = 200, description = "Acronym with the lowest id", body = crate::openapi::AcronymDoc),
        (status = 404, description = "No acronyms")
    ))]
pub async fn first_acronym(State(state): State<ServerState>) -> Result<Json<acronym::Model>, JsonApiError> {
    Ok(Json(acronym_service::first_acronym(&state.db).await?))
}

#[utoipa::path(get, path = "/api/acronyms/sorted", tag = "acronyms",
    responses((status = 200, description = "Ordered by short", body = [crate::openapi::AcronymDoc])))]
pub async fn sorted_acronyms(State(state): State<ServerState>) -> Result<Json<Vec<acronym::Model>>, JsonApiError> {
    Ok(Json(acronym_service::sorted_acronyms(&state.db).await?))
}

#[utoipa::path(get, path = "/api/acronyms/{id}/user", tag = "acronyms", params(("id" = i32, Path, description = "Acronym id")),
    responses(
        (status = 200, description = "Owner", body = crate::openapi::UserDoc),
        (status = 404, description = "Not found")
    ))]
pub async fn get_acronym_user(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(acronym_service::get_acronym_user(&state.db, id).await?))
}

#[utoipa::path(post, path = "/api/acronyms/{id}/categories/{category_id}", tag = "acronyms",
    params(("id" = i32, Path, description = "Acronym id"), ("category_id" = i32, Path, description = "Category id")),
    responses((status = 201, description = "Attached"), (status = 404, description = "Acronym or category not found")))]
pub async fn attach_category(
    State(state): State<ServerState>,
    Path((id, category_id)): Path<(i32, i32)>,
) -> Result<StatusCode, JsonApiError> {
    acronym_service::attach_category(&state.db, id, category_id).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(get, path = "/api/acronyms/{id}/categories", tag = "acronyms", params(("id" = i32, Path, description = "Acronym id")),
    responses(
        (status = 200, description = "Attached categories", body = [crate::openapi::CategoryDoc]),
        (status = 404, description = "Not found")
    ))]
pub async fn list_acronym_categories(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    Ok(Json(acronym_service::list_acronym_categories(&state.db, id).await?))
}

#[utoipa::path(delete, path = "/api/acronyms/{id}/categories/{category_id}", tag = "acronyms",
    params(("id" = i32, Path, description = "Acronym id"), ("category_id" = i32, Path, description = "Category id")),
    responses((status = 204, description = "Detached"), (status = 404, description = "Acronym or category not found")))]
pub async fn detach_category(
    State(state): State<ServerState>,
    Path((id, category_id)): Path<(i32, i32)>,
) -> Result<StatusCode, JsonApiError> {
    acronym_service::detach_category(&state.db, id, category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
