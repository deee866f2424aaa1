use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{acronym_category_pivot, category, errors, user};

/// An acronym and its expansion, owned by the user that submitted it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "acronym")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub short: String,
    pub long: String,
    #[serde(rename = "userID")]
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, Pivot }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Pivot => Entity::has_many(acronym_category_pivot::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<acronym_category_pivot::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pivot.def() }
}

/// Acronym -> pivot -> category.
impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { acronym_category_pivot::Relation::Category.def() }
    fn via() -> Option<RelationDef> { Some(acronym_category_pivot::Relation::Acronym.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert an acronym. A `user_id` with no matching user surfaces as
/// `ModelError::Constraint` from the foreign key.
pub async fn create(db: &DatabaseConnection, short: &str, long: &str, user_id: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        short: Set(short.to_string()),
        long: Set(long.to_string()),
        user_id: Set(user_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
