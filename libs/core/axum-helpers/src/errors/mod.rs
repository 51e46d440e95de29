pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Error as UuidError;
use validator::ValidationErrors;

/// Problem details body returned for every error response.
///
/// # JSON Example
///
/// ```json
/// {
///   "title": "Validation failed",
///   "type": "https://kanban.local/errors/validation",
///   "detail": "Request validation failed",
///   "status": 400,
///   "errors": ["name: must be between 1 and 100 characters"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetail {
    /// Short summary of the problem class
    pub title: String,
    /// URI identifying the problem class
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Human-readable explanation of this occurrence
    pub detail: String,
    /// HTTP status code
    pub status: u16,
    /// Itemized field messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ProblemDetail {
    pub fn new(code: ErrorCode, status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            title: code.title().to_string(),
            problem_type: code.problem_type(),
            detail: detail.into(),
            status: status.as_u16(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for ProblemDetail {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/problem+json"),
            )],
            Json(self),
        )
            .into_response()
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type at the transport boundary;
/// [`IntoResponse`] is the single place that picks status code and body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Renders the problem body without logging.
    pub fn to_problem(&self) -> ProblemDetail {
        match self {
            AppError::Database(e) => map_db_error(e),
            AppError::JsonExtractorRejection(e) => ProblemDetail::new(
                ErrorCode::InvalidJson,
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidJson.default_message(),
            )
            .with_errors(vec![e.body_text()]),
            AppError::QueryExtractorRejection(e) => ProblemDetail::new(
                ErrorCode::InvalidQuery,
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidQuery.default_message(),
            )
            .with_errors(vec![e.body_text()]),
            AppError::PathExtractorRejection(e) => ProblemDetail::new(
                ErrorCode::InvalidUuid,
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidUuid.default_message(),
            )
            .with_errors(vec![e.body_text()]),
            AppError::ValidationError(e) => ProblemDetail::new(
                ErrorCode::ValidationError,
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError.default_message(),
            )
            .with_errors(field_messages(e)),
            AppError::UuidError(e) => ProblemDetail::new(
                ErrorCode::InvalidUuid,
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidUuid.default_message(),
            )
            .with_errors(vec![e.to_string()]),
            AppError::BadRequest(msg) => ProblemDetail::new(
                ErrorCode::ValidationError,
                StatusCode::BAD_REQUEST,
                msg.clone(),
            )
            .with_errors(vec![msg.clone()]),
            AppError::NotFound(msg) => {
                ProblemDetail::new(ErrorCode::NotFound, StatusCode::NOT_FOUND, msg.clone())
            }
            AppError::Conflict(msg) => {
                ProblemDetail::new(ErrorCode::Conflict, StatusCode::CONFLICT, msg.clone())
            }
            AppError::InternalServerError(_) => ProblemDetail::new(
                ErrorCode::InternalError,
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError.default_message(),
            ),
            AppError::ServiceUnavailable(msg) => ProblemDetail::new(
                ErrorCode::ServiceUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
                msg.clone(),
            ),
        }
    }

    fn log(&self, problem: &ProblemDetail) {
        match self {
            AppError::Database(e) if problem.status >= 500 => {
                tracing::error!(error_code = db_error_code(e).code(), "Database error: {:?}", e);
            }
            AppError::Database(e) => {
                tracing::info!(
                    error_code = db_error_code(e).code(),
                    "Database constraint violation: {}",
                    e
                );
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {:?}",
                    e
                );
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query extraction error: {:?}",
                    e
                );
            }
            AppError::PathExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidUuid.code(),
                    "Path extraction error: {:?}",
                    e
                );
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
            }
            AppError::UuidError(e) => {
                tracing::warn!(error_code = ErrorCode::InvalidUuid.code(), "UUID error: {}", e);
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Bad request: {}", msg);
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = ErrorCode::Conflict.code(), "Conflict: {}", msg);
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = self.to_problem();
        self.log(&problem);
        problem.into_response()
    }
}

fn db_error_code(error: &DbErr) -> ErrorCode {
    match error.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ErrorCode::Conflict,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ErrorCode::InvalidReference,
        _ => match error {
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => ErrorCode::DatabasePoolTimeout,
            _ => ErrorCode::DatabaseError,
        },
    }
}

/// Maps a driver error to its problem body.
///
/// Unique violations become 409 and foreign-key violations 400; everything
/// else is an opaque 5xx so driver messages never reach clients.
fn map_db_error(error: &DbErr) -> ProblemDetail {
    let code = db_error_code(error);
    match code {
        ErrorCode::Conflict => {
            ProblemDetail::new(code, StatusCode::CONFLICT, code.default_message())
        }
        ErrorCode::InvalidReference => {
            ProblemDetail::new(code, StatusCode::BAD_REQUEST, code.default_message())
                .with_errors(vec![code.default_message().to_string()])
        }
        ErrorCode::DatabasePoolTimeout => {
            ProblemDetail::new(code, StatusCode::SERVICE_UNAVAILABLE, code.default_message())
        }
        _ => ProblemDetail::new(
            code,
            StatusCode::INTERNAL_SERVER_ERROR,
            code.default_message(),
        ),
    }
}

/// Flattens validator output into `field: message` lines, sorted by field.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();
    messages
}
