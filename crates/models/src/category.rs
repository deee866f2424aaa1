use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{acronym, acronym_category_pivot, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Pivot,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Pivot => Entity::has_many(acronym_category_pivot::Entity).into() }
    }
}

impl Related<acronym_category_pivot::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pivot.def() }
}

/// Category -> pivot -> acronym.
impl Related<acronym::Entity> for Entity {
    fn to() -> RelationDef { acronym_category_pivot::Relation::Acronym.def() }
    fn via() -> Option<RelationDef> { Some(acronym_category_pivot::Relation::Category.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
    Ok(am.insert(db).await?)
}
