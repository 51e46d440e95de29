use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ProblemDetail)
    ),
    info(
        title = "Kanban API",
        version = "0.1.0",
        description = "CRUD API for secretariats, accountables and projects"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_secretariats::handlers::URL, api = domain_secretariats::ApiDoc),
        (path = domain_accountables::handlers::URL, api = domain_accountables::ApiDoc),
        (path = domain_projects::handlers::URL, api = domain_projects::ApiDoc)
    )
)]
pub struct ApiDoc;
