//! Conversions between wire DTOs, use case commands and stored records.

use app_core::{Page, PageRequest};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::commands::{
    ChangeProjectStatusInput, CreateProjectInput, ProjectOutput, UpdateProjectInput,
};
use crate::models::{Project, ProjectRequest, ProjectResponse};

pub fn request_to_create_input(request: ProjectRequest) -> CreateProjectInput {
    CreateProjectInput {
        name: request.name,
        status: request.status,
        expected_start: request.expected_start,
        expected_end: request.expected_end,
        start_actual: request.start_actual,
        end_actual: request.end_actual,
        days_late: request.days_late,
        percentage_of_time_remaining: request.percentage_of_time_remaining,
        secretariat_id: request.secretariat_id,
    }
}

pub fn request_to_update_input(uuid: Uuid, request: ProjectRequest) -> UpdateProjectInput {
    UpdateProjectInput {
        uuid,
        name: request.name,
        status: request.status,
        expected_start: request.expected_start,
        expected_end: request.expected_end,
        start_actual: request.start_actual,
        end_actual: request.end_actual,
        days_late: request.days_late,
        percentage_of_time_remaining: request.percentage_of_time_remaining,
        secretariat_id: request.secretariat_id,
    }
}

pub fn output_to_response(output: ProjectOutput) -> ProjectResponse {
    ProjectResponse {
        uuid: output.uuid,
        name: output.name,
        status: output.status,
        expected_start: output.expected_start,
        expected_end: output.expected_end,
        start_actual: output.start_actual,
        end_actual: output.end_actual,
        days_late: output.days_late,
        percentage_of_time_remaining: output.percentage_of_time_remaining,
        secretariat_id: output.secretariat_id,
        created_at: output.created_at,
        updated_at: output.updated_at,
    }
}

pub fn create_input_to_record(input: CreateProjectInput, uuid: Uuid, now: DateTime<Utc>) -> Project {
    Project {
        id: None,
        uuid,
        name: input.name,
        status: input.status,
        expected_start: input.expected_start,
        expected_end: input.expected_end,
        start_actual: input.start_actual,
        end_actual: input.end_actual,
        days_late: input.days_late,
        percentage_of_time_remaining: input.percentage_of_time_remaining,
        secretariat_id: input.secretariat_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn update_input_to_record(
    input: UpdateProjectInput,
    existing: Project,
    now: DateTime<Utc>,
) -> Project {
    Project {
        name: input.name,
        status: input.status,
        expected_start: input.expected_start,
        expected_end: input.expected_end,
        start_actual: input.start_actual,
        end_actual: input.end_actual,
        days_late: input.days_late,
        percentage_of_time_remaining: input.percentage_of_time_remaining,
        secretariat_id: input.secretariat_id,
        updated_at: now,
        ..existing
    }
}

/// Touches only `status` and `updated_at`.
pub fn change_status_to_record(
    input: ChangeProjectStatusInput,
    existing: Project,
    now: DateTime<Utc>,
) -> Project {
    Project {
        status: input.status,
        updated_at: now,
        ..existing
    }
}

pub fn record_to_output(record: Project) -> ProjectOutput {
    ProjectOutput {
        uuid: record.uuid,
        name: record.name,
        status: record.status,
        expected_start: record.expected_start,
        expected_end: record.expected_end,
        start_actual: record.start_actual,
        end_actual: record.end_actual,
        days_late: record.days_late,
        percentage_of_time_remaining: record.percentage_of_time_remaining,
        secretariat_id: record.secretariat_id,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

pub fn records_to_page<P>(
    records: Vec<Project>,
    request: &PageRequest<P>,
    total: u64,
) -> Page<ProjectOutput> {
    Page::new(
        records.into_iter().map(record_to_output).collect(),
        request.page,
        request.size,
        total,
    )
}

pub fn page_to_response(page: Page<ProjectOutput>) -> Page<ProjectResponse> {
    page.map(output_to_response)
}
