use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ProblemDetail};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    ProblemDetail::new(
        ErrorCode::RouteNotFound,
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound.default_message(),
    )
    .into_response()
}

/// Fallback handler for methods a route does not serve.
pub async fn method_not_allowed() -> Response {
    ProblemDetail::new(
        ErrorCode::MethodNotAllowed,
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message(),
    )
    .into_response()
}
