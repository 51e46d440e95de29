//! Use case inputs and outputs, one struct per operation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccountableInput {
    pub name: String,
    pub email: String,
    pub role: String,
    pub secretariat_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAccountableInput {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub secretariat_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountableOutput {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub secretariat_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
