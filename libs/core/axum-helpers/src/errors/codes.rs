//! Type-safe error codes for API responses.
//!
//! Each code carries:
//! - a string identifier for logs (e.g., "VALIDATION_ERROR")
//! - an integer code for monitoring (e.g., 1001)
//! - the problem `title` and `type` slug rendered to clients
//! - a default human-readable detail
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.title(), "Validation failed");
//! assert_eq!(code.problem_type(), "https://kanban.local/errors/validation");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Base URI of every problem `type`.
pub const PROBLEM_TYPE_BASE: &str = "https://kanban.local/errors";

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body or query failed declarative validation
    ValidationError,

    /// Invalid UUID format in path parameter
    InvalidUuid,

    /// Request body is not valid JSON for the target type
    InvalidJson,

    /// Query string could not be deserialized
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with an existing resource
    Conflict,

    /// Referenced resource does not exist
    InvalidReference,

    /// No route matches the request path
    RouteNotFound,

    /// Route exists but not for this method
    MethodNotAllowed,

    // Server errors (1500s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Storage driver or query failure
    DatabaseError,

    /// Connection pool could not hand out a connection in time
    DatabasePoolTimeout,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
        }
    }

    /// Integer code for logging and monitoring
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::InvalidJson => 1003,
            Self::InvalidQuery => 1004,
            Self::NotFound => 1005,
            Self::Conflict => 1006,
            Self::InvalidReference => 1007,
            Self::RouteNotFound => 1008,
            Self::MethodNotAllowed => 1009,

            Self::InternalError => 1500,
            Self::ServiceUnavailable => 1503,

            Self::DatabaseError => 2001,
            Self::DatabasePoolTimeout => 2002,
        }
    }

    /// Short, stable summary rendered as the problem `title`.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ValidationError
            | Self::InvalidUuid
            | Self::InvalidJson
            | Self::InvalidQuery
            | Self::InvalidReference => "Validation failed",
            Self::NotFound | Self::RouteNotFound => "Resource not found",
            Self::Conflict => "Conflict",
            Self::MethodNotAllowed => "Method not allowed",
            Self::InternalError | Self::DatabaseError => "Internal server error",
            Self::ServiceUnavailable | Self::DatabasePoolTimeout => "Service unavailable",
        }
    }

    /// Last path segment of the problem `type`.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ValidationError
            | Self::InvalidUuid
            | Self::InvalidJson
            | Self::InvalidQuery
            | Self::InvalidReference => "validation",
            Self::NotFound | Self::RouteNotFound => "not-found",
            Self::Conflict => "conflict",
            Self::MethodNotAllowed => "method-not-allowed",
            Self::InternalError | Self::DatabaseError => "internal",
            Self::ServiceUnavailable | Self::DatabasePoolTimeout => "unavailable",
        }
    }

    pub fn problem_type(&self) -> String {
        format!("{}/{}", PROBLEM_TYPE_BASE, self.slug())
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::InvalidJson => "Invalid JSON body",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::InvalidReference => "Referenced resource does not exist",
            Self::RouteNotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "An internal server error occurred",
            Self::DatabasePoolTimeout => "Service is temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
