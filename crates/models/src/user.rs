use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{acronym, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Acronym,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Acronym => Entity::has_many(acronym::Entity).into() }
    }
}

impl Related<acronym::Entity> for Entity {
    fn to() -> RelationDef { Relation::Acronym.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, name: &str, username: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        username: Set(username.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
