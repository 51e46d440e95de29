use app_core::PagingError;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AccountableError {
    #[error("Accountable not found: {0}")]
    NotFound(Uuid),

    #[error("E-mail already registered: {0}")]
    EmailAlreadyRegistered(String),

    #[error(transparent)]
    Paging(#[from] PagingError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type AccountableResult<T> = Result<T, AccountableError>;

impl AccountableError {
    /// Reclassifies a unique-index violation on write as a duplicate e-mail.
    ///
    /// The only user-writable unique column is the e-mail, so a violation
    /// raised while saving means another row already holds it.
    pub fn on_duplicate_email(self, email: &str) -> Self {
        match self {
            AccountableError::Database(ref e)
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                AccountableError::EmailAlreadyRegistered(email.to_string())
            }
            other => other,
        }
    }
}

/// Convert AccountableError to AppError for standardized error responses
impl From<AccountableError> for AppError {
    fn from(err: AccountableError) -> Self {
        match err {
            AccountableError::NotFound(id) => {
                AppError::NotFound(format!("Accountable {} not found", id))
            }
            AccountableError::EmailAlreadyRegistered(_) => {
                AppError::Conflict("E-mail already registered".to_string())
            }
            AccountableError::Paging(e) => AppError::BadRequest(e.to_string()),
            AccountableError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for AccountableError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
