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
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::SecretariatResult;
use crate::models::{SecretariatRequest, SecretariatResponse};
use crate::port::SecretariatPort;

/// OpenAPI tag for every secretariat endpoint
pub const TAG: &str = "secretariats";

/// Mount point below `/api`
pub const URL: &str = "/secretariats";

/// OpenAPI documentation for Secretariats API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_secretariats,
        create_secretariat,
        get_secretariat,
        update_secretariat,
        delete_secretariat,
    ),
    components(
        schemas(SecretariatRequest, SecretariatResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Secretariat management endpoints")
    )
)]
pub struct ApiDoc;

type SharedPort = Arc<dyn SecretariatPort>;

/// Create the secretariat router with all HTTP endpoints
pub fn router(port: SharedPort) -> Router {
    Router::new()
        .route("/", get(list_secretariats).post(create_secretariat))
        .route(
            "/{id}",
            get(get_secretariat)
                .put(update_secretariat)
                .delete(delete_secretariat),
        )
        .with_state(port)
}

/// List secretariats page by page
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of secretariats", body = Page<SecretariatResponse>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_secretariats(
    State(port): State<SharedPort>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> SecretariatResult<Json<Page<SecretariatResponse>>> {
    let page = port.list(params).await?;
    Ok(Json(page))
}

/// Create a new secretariat
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = SecretariatRequest,
    responses(
        (status = 201, description = "Secretariat created successfully", body = SecretariatResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_secretariat(
    State(port): State<SharedPort>,
    ValidatedJson(request): ValidatedJson<SecretariatRequest>,
) -> SecretariatResult<impl IntoResponse> {
    let secretariat = port.create(request).await?;
    Ok((StatusCode::CREATED, Json(secretariat)))
}

/// Get a secretariat by UUID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Secretariat UUID")
    ),
    responses(
        (status = 200, description = "Secretariat found", body = SecretariatResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_secretariat(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
) -> SecretariatResult<Json<SecretariatResponse>> {
    let secretariat = port.find(id).await?;
    Ok(Json(secretariat))
}

/// Replace a secretariat
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Secretariat UUID")
    ),
    request_body = SecretariatRequest,
    responses(
        (status = 200, description = "Secretariat updated successfully", body = SecretariatResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_secretariat(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<SecretariatRequest>,
) -> SecretariatResult<Json<SecretariatResponse>> {
    let secretariat = port.update(id, request).await?;
    Ok(Json(secretariat))
}

/// Delete a secretariat
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Secretariat UUID")
    ),
    responses(
        (status = 204, description = "Secretariat deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_secretariat(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
) -> SecretariatResult<impl IntoResponse> {
    port.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
