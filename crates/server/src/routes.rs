use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod acronyms;
pub mod categories;
pub mod users;

/// Shared handler state; the connection is a cheap, cloneable pool handle.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: acronym, user and category APIs plus health and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Static segments are matched ahead of `:id`.
    let acronym_routes = Router::new()
        .route("/api/acronyms", get(acronyms::list_acronyms).post(acronyms::create_acronym))
        .route("/api/acronyms/search", get(acronyms::search_acronyms))
        .route("/api/acronyms/first", get(acronyms::first_acronym))
        .route("/api/acronyms/sorted", get(acronyms::sorted_acronyms))
        .route(
            "/api/acronyms/:id",
            get(acronyms::get_acronym).put(acronyms::update_acronym).delete(acronyms::delete_acronym),
        )
        .route("/api/acronyms/:id/user", get(acronyms::get_acronym_user))
        .route("/api/acronyms/:id/categories", get(acronyms::list_acronym_categories))
        .route(
            "/api/acronyms/:id/categories/:category_id",
            post(acronyms::attach_category).delete(acronyms::detach_category),
        );

    let user_routes = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/:id", get(users::get_user))
        .route("/api/users/:id/acronyms", get(users::list_user_acronyms));

    let category_routes = Router::new()
        .route("/api/categories", get(categories::list_categories).post(categories::create_category))
        .route("/api/categories/:id", get(categories::get_category))
        .route("/api/categories/:id/acronyms", get(categories::list_category_acronyms));

    public
        .merge(acronym_routes)
        .merge(user_routes)
        .merge(category_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
