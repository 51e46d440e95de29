//! Use case inputs and outputs, one struct per operation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::ProjectStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectInput {
    pub name: String,
    pub status: ProjectStatus,
    pub expected_start: DateTime<Utc>,
    pub expected_end: DateTime<Utc>,
    pub start_actual: Option<DateTime<Utc>>,
    pub end_actual: Option<DateTime<Utc>>,
    pub days_late: i32,
    pub percentage_of_time_remaining: f64,
    pub secretariat_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProjectInput {
    pub uuid: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    pub expected_start: DateTime<Utc>,
    pub expected_end: DateTime<Utc>,
    pub start_actual: Option<DateTime<Utc>>,
    pub end_actual: Option<DateTime<Utc>>,
    pub days_late: i32,
    pub percentage_of_time_remaining: f64,
    pub secretariat_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeProjectStatusInput {
    pub uuid: Uuid,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOutput {
    pub uuid: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    pub expected_start: DateTime<Utc>,
    pub expected_end: DateTime<Utc>,
    pub start_actual: Option<DateTime<Utc>>,
    pub end_actual: Option<DateTime<Utc>>,
    pub days_late: i32,
    pub percentage_of_time_remaining: f64,
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
