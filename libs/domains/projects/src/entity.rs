use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Project, ProjectStatus};

/// Sea-ORM Entity for the project table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    pub expected_start: DateTimeWithTimeZone,
    pub expected_end: DateTimeWithTimeZone,
    pub start_actual: Option<DateTimeWithTimeZone>,
    pub end_actual: Option<DateTimeWithTimeZone>,
    pub days_late: i32,
    #[sea_orm(column_type = "Double")]
    pub percentage_of_time_remaining: f64,
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::project_accountables::Entity")]
    Accountables,
}

impl Related<crate::project_accountables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accountables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            uuid: model.uuid,
            name: model.name,
            status: model.status,
            expected_start: model.expected_start.into(),
            expected_end: model.expected_end.into(),
            start_actual: model.start_actual.map(Into::into),
            end_actual: model.end_actual.map(Into::into),
            days_late: model.days_late,
            percentage_of_time_remaining: model.percentage_of_time_remaining,
            secretariat_id: model.secretariat_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// A record without an id becomes an insert
impl From<Project> for ActiveModel {
    fn from(project: Project) -> Self {
        ActiveModel {
            id: project.id.map_or(NotSet, Set),
            uuid: Set(project.uuid),
            name: Set(project.name),
            status: Set(project.status),
            expected_start: Set(project.expected_start.into()),
            expected_end: Set(project.expected_end.into()),
            start_actual: Set(project.start_actual.map(Into::into)),
            end_actual: Set(project.end_actual.map(Into::into)),
            days_late: Set(project.days_late),
            percentage_of_time_remaining: Set(project.percentage_of_time_remaining),
            secretariat_id: Set(project.secretariat_id),
            created_at: Set(project.created_at.into()),
            updated_at: Set(project.updated_at.into()),
        }
    }
}
