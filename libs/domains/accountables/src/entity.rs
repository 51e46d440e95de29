use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Accountable;

/// Sea-ORM Entity for the accountable table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accountable")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Business UUID of the owning secretariat
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Accountable {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            uuid: model.uuid,
            name: model.name,
            email: model.email,
            role: model.role,
            secretariat_id: model.secretariat_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Accountable> for ActiveModel {
    fn from(accountable: Accountable) -> Self {
        ActiveModel {
            id: accountable.id.map_or(NotSet, Set),
            uuid: Set(accountable.uuid),
            name: Set(accountable.name),
            email: Set(accountable.email),
            role: Set(accountable.role),
            secretariat_id: Set(accountable.secretariat_id),
            created_at: Set(accountable.created_at.into()),
            updated_at: Set(accountable.updated_at.into()),
        }
    }
}
