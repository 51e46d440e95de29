use chrono::{DateTime, Utc};
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a project.
///
/// Any status may follow any other; no transition graph is enforced.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    #[sea_orm(string_value = "TODO")]
    Todo,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "DONE")]
    Done,
}

/// Project as stored, one per table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Option<i64>,
    pub uuid: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    pub expected_start: DateTime<Utc>,
    pub expected_end: DateTime<Utc>,
    pub start_actual: Option<DateTime<Utc>>,
    pub end_actual: Option<DateTime<Utc>>,
    pub days_late: i32,
    pub percentage_of_time_remaining: f64,
    /// Business UUID of the owning secretariat
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[validate(
        custom(function = "app_core::validation::not_blank"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    #[schema(example = "Portal redesign")]
    pub name: String,

    pub status: ProjectStatus,

    #[schema(example = "2025-01-01T00:00:00Z")]
    pub expected_start: DateTime<Utc>,

    #[schema(example = "2025-03-31T00:00:00Z")]
    pub expected_end: DateTime<Utc>,

    #[serde(default)]
    pub start_actual: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_actual: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    #[schema(example = 2)]
    pub days_late: i32,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    #[schema(example = 25.7)]
    pub percentage_of_time_remaining: f64,

    #[serde(default)]
    pub secretariat_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub uuid: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    pub expected_start: DateTime<Utc>,
    pub expected_end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_actual: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_actual: Option<DateTime<Utc>>,
    pub days_late: i32,
    pub percentage_of_time_remaining: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query string of `PATCH /projects/{id}/status`
#[derive(Debug, Clone, Copy, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusParams {
    /// New status
    pub status: ProjectStatus,
}

/// Properties a project listing can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ProjectSort {
    #[default]
    Name,
    Status,
    ExpectedStart,
    ExpectedEnd,
    CreatedAt,
    UpdatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_json() -> serde_json::Value {
        json!({
            "name": "Portal redesign",
            "status": "IN_PROGRESS",
            "expectedStart": "2025-01-01T00:00:00Z",
            "expectedEnd": "2025-03-31T00:00:00Z",
        })
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(json!(ProjectStatus::InProgress), json!("IN_PROGRESS"));
        assert_eq!("DONE".parse::<ProjectStatus>().unwrap(), ProjectStatus::Done);
        assert_eq!(ProjectStatus::Todo.as_ref(), "TODO");
        assert!("in_progress".parse::<ProjectStatus>().is_err());
        assert!(serde_json::from_value::<ProjectStatus>(json!("ARCHIVED")).is_err());
    }

    #[test]
    fn test_status_column_is_bounded_text() {
        use sea_orm::sea_query::ColumnType;
        use sea_orm::{ActiveEnum, Iterable};

        assert_eq!(
            ProjectStatus::db_type().get_column_type(),
            &ColumnType::String(StringLen::N(50))
        );
        let stored: Vec<String> = ProjectStatus::iter().map(|s| s.to_value()).collect();
        assert_eq!(stored, vec!["TODO", "IN_PROGRESS", "DONE"]);
    }

    #[test]
    fn test_request_defaults_counters() {
        let request: ProjectRequest = serde_json::from_value(request_json()).unwrap();

        assert_eq!(request.status, ProjectStatus::InProgress);
        assert_eq!(request.days_late, 0);
        assert_eq!(request.percentage_of_time_remaining, 0.0);
        assert_eq!(request.start_actual, None);
        assert_eq!(request.secretariat_id, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_requires_expected_dates() {
        let mut value = request_json();
        value.as_object_mut().unwrap().remove("expectedEnd");

        assert!(serde_json::from_value::<ProjectRequest>(value).is_err());
    }

    #[test]
    fn test_request_rejects_negative_counters_and_long_name() {
        let mut request: ProjectRequest = serde_json::from_value(request_json()).unwrap();
        request.name = "x".repeat(201);
        request.days_late = -1;
        request.percentage_of_time_remaining = -0.5;

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("days_late"));
        assert!(fields.contains_key("percentage_of_time_remaining"));
    }

    #[test]
    fn test_response_omits_missing_optionals() {
        let now = Utc::now();
        let response = ProjectResponse {
            uuid: Uuid::new_v4(),
            name: "Portal".into(),
            status: ProjectStatus::Todo,
            expected_start: now,
            expected_end: now,
            start_actual: None,
            end_actual: None,
            days_late: 0,
            percentage_of_time_remaining: 0.0,
            secretariat_id: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "TODO");
        assert!(value.get("startActual").is_none());
        assert!(value.get("secretariatId").is_none());
        assert_eq!(value["percentageOfTimeRemaining"], 0.0);
    }

    #[test]
    fn test_sort_property_names() {
        assert_eq!(
            "expectedStart".parse::<ProjectSort>().unwrap(),
            ProjectSort::ExpectedStart
        );
        assert_eq!("status".parse::<ProjectSort>().unwrap(), ProjectSort::Status);
        assert!("daysLate".parse::<ProjectSort>().is_err());
    }
}
