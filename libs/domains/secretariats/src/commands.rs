//! Use case inputs and outputs, one struct per operation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSecretariatInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSecretariatInput {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// What every secretariat use case hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretariatOutput {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
