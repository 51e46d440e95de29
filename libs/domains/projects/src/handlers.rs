use app_core::{Page, PageParams};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
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

use crate::error::ProjectResult;
use crate::models::{ProjectRequest, ProjectResponse, ProjectStatus, StatusParams};
use crate::port::ProjectPort;

pub const TAG: &str = "projects";

/// Mount point below `/api`
pub const URL: &str = "/projects";

/// OpenAPI documentation for Projects API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        update_project,
        change_project_status,
        delete_project,
    ),
    components(
        schemas(ProjectRequest, ProjectResponse, ProjectStatus),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Projects and their lifecycle status")
    )
)]
pub struct ApiDoc;

type SharedPort = Arc<dyn ProjectPort>;

/// Create the project router with all HTTP endpoints
pub fn router(port: SharedPort) -> Router {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/{id}/status", patch(change_project_status))
        .with_state(port)
}

/// List projects page by page
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of projects", body = Page<ProjectResponse>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_projects(
    State(port): State<SharedPort>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> ProjectResult<Json<Page<ProjectResponse>>> {
    Ok(Json(port.list(params).await?))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created successfully", body = ProjectResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_project(
    State(port): State<SharedPort>,
    ValidatedJson(request): ValidatedJson<ProjectRequest>,
) -> ProjectResult<impl IntoResponse> {
    let project = port.create(request).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project by UUID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Project UUID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<ProjectResponse>> {
    Ok(Json(port.find(id).await?))
}

/// Replace a project
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Project UUID")
    ),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project updated successfully", body = ProjectResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_project(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<ProjectRequest>,
) -> ProjectResult<Json<ProjectResponse>> {
    Ok(Json(port.update(id, request).await?))
}

/// Change only the status of a project
#[utoipa::path(
    patch,
    path = "/{id}/status",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Project UUID"),
        StatusParams
    ),
    responses(
        (status = 200, description = "Status changed", body = ProjectResponse),
        (status = 400, response = BadRequestQueryResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn change_project_status(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
    ValidatedQuery(params): ValidatedQuery<StatusParams>,
) -> ProjectResult<Json<ProjectResponse>> {
    Ok(Json(port.change_status(id, params.status).await?))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Project UUID")
    ),
    responses(
        (status = 204, description = "Project deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_project(
    State(port): State<SharedPort>,
    UuidPath(id): UuidPath,
) -> ProjectResult<impl IntoResponse> {
    port.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
