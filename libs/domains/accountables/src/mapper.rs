//! Conversions between wire DTOs, use case commands and stored records.

use app_core::{Page, PageRequest};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::commands::{AccountableOutput, CreateAccountableInput, UpdateAccountableInput};
use crate::models::{Accountable, AccountableRequest, AccountableResponse};

pub fn request_to_create_input(request: AccountableRequest) -> CreateAccountableInput {
    CreateAccountableInput {
        name: request.name,
        email: request.email,
        role: request.role,
        secretariat_id: request.secretariat_id,
    }
}

pub fn request_to_update_input(uuid: Uuid, request: AccountableRequest) -> UpdateAccountableInput {
    UpdateAccountableInput {
        uuid,
        name: request.name,
        email: request.email,
        role: request.role,
        secretariat_id: request.secretariat_id,
    }
}

pub fn output_to_response(output: AccountableOutput) -> AccountableResponse {
    AccountableResponse {
        uuid: output.uuid,
        name: output.name,
        email: output.email,
        role: output.role,
        secretariat_id: output.secretariat_id,
        created_at: output.created_at,
        updated_at: output.updated_at,
    }
}

pub fn create_input_to_record(
    input: CreateAccountableInput,
    uuid: Uuid,
    now: DateTime<Utc>,
) -> Accountable {
    Accountable {
        id: None,
        uuid,
        name: input.name,
        email: input.email,
        role: input.role,
        secretariat_id: input.secretariat_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn update_input_to_record(
    input: UpdateAccountableInput,
    existing: Accountable,
    now: DateTime<Utc>,
) -> Accountable {
    Accountable {
        name: input.name,
        email: input.email,
        role: input.role,
        secretariat_id: input.secretariat_id,
        updated_at: now,
        ..existing
    }
}

pub fn record_to_output(record: Accountable) -> AccountableOutput {
    AccountableOutput {
        uuid: record.uuid,
        name: record.name,
        email: record.email,
        role: record.role,
        secretariat_id: record.secretariat_id,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

pub fn records_to_page<P>(
    records: Vec<Accountable>,
    request: &PageRequest<P>,
    total: u64,
) -> Page<AccountableOutput> {
    Page::new(
        records.into_iter().map(record_to_output).collect(),
        request.page,
        request.size,
        total,
    )
}

pub fn page_to_response(page: Page<AccountableOutput>) -> Page<AccountableResponse> {
    page.map(output_to_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_round_trips_to_response_fields() {
        let secretariat = Uuid::new_v4();
        let request = AccountableRequest {
            name: "Ana".into(),
            email: "Ana@Example.com".into(),
            role: "Dev".into(),
            secretariat_id: Some(secretariat),
        };
        let now = Utc::now();
        let uuid = Uuid::new_v4();

        let record = create_input_to_record(request_to_create_input(request), uuid, now);
        let response = output_to_response(record_to_output(record));

        assert_eq!(response.uuid, uuid);
        assert_eq!(response.email, "Ana@Example.com");
        assert_eq!(response.secretariat_id, Some(secretariat));
        assert_eq!(response.created_at, now);
    }

    #[test]
    fn test_update_can_detach_secretariat() {
        let now = Utc::now();
        let existing = Accountable {
            id: Some(4),
            uuid: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            role: "Dev".into(),
            secretariat_id: Some(Uuid::new_v4()),
            created_at: now,
            updated_at: now,
        };
        let input = UpdateAccountableInput {
            uuid: existing.uuid,
            name: "Ana S.".into(),
            email: "ana@example.com".into(),
            role: "Lead".into(),
            secretariat_id: None,
        };

        let updated = update_input_to_record(input, existing.clone(), now);

        assert_eq!(updated.id, Some(4));
        assert_eq!(updated.secretariat_id, None);
        assert_eq!(updated.role, "Lead");
        assert_eq!(updated.created_at, existing.created_at);
    }
}
