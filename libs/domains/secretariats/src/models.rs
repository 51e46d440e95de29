use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Secretariat as stored, one per table row.
///
/// `id` is the storage key and never leaves the crate; callers only see `uuid`.
#[derive(Debug, Clone, PartialEq)]
pub struct Secretariat {
    pub id: Option<i64>,
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing a secretariat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretariatRequest {
    #[validate(
        custom(function = "app_core::validation::not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    #[schema(example = "Finance")]
    pub name: String,

    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    #[schema(example = "Budget and accounting")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretariatResponse {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Properties a secretariat listing can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SecretariatSort {
    #[default]
    Name,
    CreatedAt,
    UpdatedAt,
}
