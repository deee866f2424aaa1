use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{acronyms, categories, users};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of an acronym.
#[derive(Serialize, ToSchema)]
pub struct AcronymDoc {
    pub id: i32,
    pub short: String,
    pub long: String,
    #[serde(rename = "userID")]
    pub user_id: i32,
}

#[derive(ToSchema)]
pub struct UserDoc { pub id: i32, pub name: String, pub username: String }

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: i32, pub name: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        acronyms::list_acronyms,
        acronyms::create_acronym,
        acronyms::get_acronym,
        acronyms::update_acronym,
        acronyms::delete_acronym,
        acronyms::search_acronyms,
        acronyms::first_acronym,
        acronyms::sorted_acronyms,
        acronyms::get_acronym_user,
        acronyms::attach_category,
        acronyms::list_acronym_categories,
        acronyms::detach_category,
        users::list_users,
        users::create_user,
        users::get_user,
        users::list_user_acronyms,
        categories::list_categories,
        categories::create_category,
        categories::get_category,
        categories::list_category_acronyms,
    ),
    components(
        schemas(
            HealthResponse,
            AcronymDoc,
            UserDoc,
            CategoryDoc,
            acronyms::AcronymInput,
            users::UserInput,
            categories::CategoryInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "acronyms"),
        (name = "users"),
        (name = "categories")
    )
)]
pub struct ApiDoc;
