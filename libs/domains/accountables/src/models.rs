use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Person responsible for projects, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Accountable {
    pub id: Option<i64>,
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing an accountable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountableRequest {
    #[validate(
        custom(function = "app_core::validation::not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    #[schema(example = "Ana Souza")]
    pub name: String,

    #[validate(
        email(message = "must be a valid e-mail address"),
        length(max = 150, message = "must be at most 150 characters")
    )]
    #[schema(example = "ana.souza@example.com")]
    pub email: String,

    #[validate(
        custom(function = "app_core::validation::not_blank"),
        length(max = 50, message = "must be at most 50 characters")
    )]
    #[schema(example = "Product Owner")]
    pub role: String,

    /// UUID of the secretariat this person belongs to
    pub secretariat_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountableResponse {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Properties an accountable listing can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum AccountableSort {
    #[default]
    Name,
    Email,
    Role,
    CreatedAt,
    UpdatedAt,
}
