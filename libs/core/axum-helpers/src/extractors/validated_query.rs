//! Query string extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// The query-string counterpart of [`ValidatedJson`](super::ValidatedJson):
/// unparsable parameters and failed `Validate` rules both reject with 400.
///
/// ```ignore
/// async fn list(ValidatedQuery(params): ValidatedQuery<PageParams>) { /* ... */ }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        params.validate()?;
        Ok(ValidatedQuery(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Params {
        #[serde(default)]
        #[validate(range(min = 1, max = 10))]
        size: u32,
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route(
            "/",
            get(|ValidatedQuery(p): ValidatedQuery<Params>| async move { p.size.to_string() }),
        );
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_query_passes() {
        assert_eq!(status_for("/?size=5").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_out_of_range_is_rejected() {
        assert_eq!(status_for("/?size=11").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unparsable_value_is_rejected() {
        assert_eq!(status_for("/?size=abc").await, StatusCode::BAD_REQUEST);
    }
}
