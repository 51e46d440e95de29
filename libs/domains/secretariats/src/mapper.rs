//! Conversions between wire DTOs, use case commands and stored records.

use app_core::{Page, PageRequest};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::commands::{CreateSecretariatInput, SecretariatOutput, UpdateSecretariatInput};
use crate::models::{Secretariat, SecretariatRequest, SecretariatResponse};

pub fn request_to_create_input(request: SecretariatRequest) -> CreateSecretariatInput {
    CreateSecretariatInput {
        name: request.name,
        description: request.description,
    }
}

pub fn request_to_update_input(uuid: Uuid, request: SecretariatRequest) -> UpdateSecretariatInput {
    UpdateSecretariatInput {
        uuid,
        name: request.name,
        description: request.description,
    }
}

pub fn output_to_response(output: SecretariatOutput) -> SecretariatResponse {
    SecretariatResponse {
        uuid: output.uuid,
        name: output.name,
        description: output.description,
        created_at: output.created_at,
        updated_at: output.updated_at,
    }
}

/// New, unsaved record with a fresh `uuid` and both timestamps at `now`.
pub fn create_input_to_record(
    input: CreateSecretariatInput,
    uuid: Uuid,
    now: DateTime<Utc>,
) -> Secretariat {
    Secretariat {
        id: None,
        uuid,
        name: input.name,
        description: input.description,
        created_at: now,
        updated_at: now,
    }
}

/// Replaces the mutable fields of `existing`, keeping its identity and `created_at`.
pub fn update_input_to_record(
    input: UpdateSecretariatInput,
    existing: Secretariat,
    now: DateTime<Utc>,
) -> Secretariat {
    Secretariat {
        name: input.name,
        description: input.description,
        updated_at: now,
        ..existing
    }
}

pub fn record_to_output(record: Secretariat) -> SecretariatOutput {
    SecretariatOutput {
        uuid: record.uuid,
        name: record.name,
        description: record.description,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

pub fn records_to_page<P>(
    records: Vec<Secretariat>,
    request: &PageRequest<P>,
    total: u64,
) -> Page<SecretariatOutput> {
    Page::new(
        records.into_iter().map(record_to_output).collect(),
        request.page,
        request.size,
        total,
    )
}

pub fn page_to_response(page: Page<SecretariatOutput>) -> Page<SecretariatResponse> {
    page.map(output_to_response)
}
