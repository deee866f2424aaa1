use sea_orm::{entity::prelude::*, sea_query::OnConflict, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{acronym, category, errors};

/// One acronym/category edge. The pair is the primary key, so an edge exists
/// at most once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "acronym_category_pivot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "acronymID")]
    pub acronym_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "categoryID")]
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Acronym, Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Acronym => Entity::belongs_to(acronym::Entity)
                .from(Column::AcronymId)
                .to(acronym::Column::Id)
                .into(),
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<acronym::Entity> for Entity {
    fn to() -> RelationDef { Relation::Acronym.def() }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert the edge unless it already exists. Returns whether a row was added.
pub async fn attach(db: &DatabaseConnection, acronym_id: i32, category_id: i32) -> Result<bool, errors::ModelError> {
    let am = ActiveModel { acronym_id: Set(acronym_id), category_id: Set(category_id) };
    let inserted = Entity::insert(am)
        .on_conflict(
            OnConflict::columns([Column::AcronymId, Column::CategoryId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(inserted > 0)
}

/// Remove the edge if present. Returns whether a row was removed.
pub async fn detach(db: &DatabaseConnection, acronym_id: i32, category_id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id((acronym_id, category_id)).exec(db).await?;
    Ok(res.rows_affected > 0)
}
