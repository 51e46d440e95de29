use app_core::{Page, PageParams};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AccountableResult;
use crate::models::{AccountableRequest, AccountableResponse};
use crate::port::AccountablePort;

pub const TAG: &str = "accountables";

/// Mount point below `/api`
pub const URL: &str = "/accountables";

/// OpenAPI documentation for Accountables API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_accountables,
        create_accountable,
        get_accountable,
        update_accountable,
        delete_accountable,
    ),
    components(
        schemas(AccountableRequest, AccountableResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestQueryResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "People accountable for projects")
    )
)]
pub struct ApiDoc;

type SharedPort = Arc<dyn AccountablePort>;

/// Create the accountable router with all HTTP endpoints
pub fn router(port: SharedPort) -> Router {
    Router::new()
        .route("/", get(list_accountables).post(create_accountable))
        .route(
            "/{id}",
            get(get_accountable)
                .put(update_accountable)
                .delete(delete_accountable),
        )
        .with_state(port)
}

/// List accountables page by page
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of accountables", body = Page<AccountableResponse>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_accountables(
    State(port): State<SharedPort>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> AccountableResult<Json<Page<AccountableResponse>>> {
    Ok(Json(port.list(params).await?))
}

/// Register a new accountable
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = AccountableRequest,
    responses(
        (status = 201, description = "Accountable created successfully", body = AccountableResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_accountable(
    State(port): State<SharedPort>,
    ValidatedJson(request): ValidatedJson<AccountableRequest>,
) -> AccountableResult<impl IntoResponse> {
    let accountable = port.create(request).await?;
    Ok((StatusCode::CREATED, Json(accountable)))
}

/// Get an accountable by UUID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Accountable UUID")
    ),
    responses(
        (status = 200, description = "Accountable found", body = AccountableResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_accountable(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
) -> AccountableResult<Json<AccountableResponse>> {
    Ok(Json(port.find(id).await?))
}

/// Replace an accountable
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Accountable UUID")
    ),
    request_body = AccountableRequest,
    responses(
        (status = 200, description = "Accountable updated successfully", body = AccountableResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_accountable(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<AccountableRequest>,
) -> AccountableResult<Json<AccountableResponse>> {
    Ok(Json(port.update(id, request).await?))
}

/// Delete an accountable
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Accountable UUID")
    ),
    responses(
        (status = 204, description = "Accountable deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_accountable(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
) -> AccountableResult<impl IntoResponse> {
    port.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
