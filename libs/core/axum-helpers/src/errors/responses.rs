//! Reusable OpenAPI response types for consistent API documentation.

use super::ProblemDetail;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/problem+json",
    example = json!({
        "title": "Internal server error",
        "type": "https://kanban.local/errors/internal",
        "detail": "An internal server error occurred",
        "status": 500
    })
)]
pub struct InternalServerErrorResponse(pub ProblemDetail);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/problem+json",
    example = json!({
        "title": "Validation failed",
        "type": "https://kanban.local/errors/validation",
        "detail": "Request validation failed",
        "status": 400,
        "errors": ["name: must be between 1 and 100 characters"]
    })
)]
pub struct BadRequestValidationResponse(pub ProblemDetail);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/problem+json",
    example = json!({
        "title": "Validation failed",
        "type": "https://kanban.local/errors/validation",
        "detail": "Invalid UUID format",
        "status": 400,
        "errors": ["invalid character: expected an optional prefix of `urn:uuid:` followed by [0-9a-fA-F-], found `x` at 1"]
    })
)]
pub struct BadRequestUuidResponse(pub ProblemDetail);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid paging or query parameters",
    content_type = "application/problem+json",
    example = json!({
        "title": "Validation failed",
        "type": "https://kanban.local/errors/validation",
        "detail": "Unknown sort property 'colour'",
        "status": 400,
        "errors": ["Unknown sort property 'colour'"]
    })
)]
pub struct BadRequestQueryResponse(pub ProblemDetail);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/problem+json",
    example = json!({
        "title": "Resource not found",
        "type": "https://kanban.local/errors/not-found",
        "detail": "Secretariat 0192f0c1-7a3e-7c55-8f0e-5b1d2c3a4b5c not found",
        "status": 404
    })
)]
pub struct NotFoundResponse(pub ProblemDetail);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/problem+json",
    example = json!({
        "title": "Conflict",
        "type": "https://kanban.local/errors/conflict",
        "detail": "E-mail already registered",
        "status": 409
    })
)]
pub struct ConflictResponse(pub ProblemDetail);
