use app_core::PagingError;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SecretariatError {
    #[error("Secretariat not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Paging(#[from] PagingError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type SecretariatResult<T> = Result<T, SecretariatError>;

/// Convert SecretariatError to AppError for standardized error responses
impl From<SecretariatError> for AppError {
    fn from(err: SecretariatError) -> Self {
        match err {
            SecretariatError::NotFound(id) => {
                AppError::NotFound(format!("Secretariat {} not found", id))
            }
            SecretariatError::Paging(e) => AppError::BadRequest(e.to_string()),
            SecretariatError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for SecretariatError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
