use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Secretariat;

/// Sea-ORM Entity for the secretariat table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "secretariat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Secretariat {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            uuid: model.uuid,
            name: model.name,
            description: model.description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// A record without an id becomes an insert
impl From<Secretariat> for ActiveModel {
    fn from(secretariat: Secretariat) -> Self {
        ActiveModel {
            id: secretariat.id.map_or(NotSet, Set),
            uuid: Set(secretariat.uuid),
            name: Set(secretariat.name),
            description: Set(secretariat.description),
            created_at: Set(secretariat.created_at.into()),
            updated_at: Set(secretariat.updated_at.into()),
        }
    }
}
