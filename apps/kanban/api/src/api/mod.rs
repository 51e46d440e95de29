use axum::Router;
use domain_accountables::{AccountableService, PgAccountableUnitOfWork};
use domain_projects::{ProjectService, PgProjectUnitOfWork};
use domain_secretariats::{PgSecretariatUnitOfWork, SecretariatService};
use std::sync::Arc;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Each domain gets its service over a Postgres unit of work sharing the pool.
pub fn routes(state: &crate::state::AppState) -> Router {
    let secretariats = SecretariatService::new(PgSecretariatUnitOfWork::new(state.db.clone()));
    let accountables = AccountableService::new(PgAccountableUnitOfWork::new(state.db.clone()));
    let projects = ProjectService::new(PgProjectUnitOfWork::new(state.db.clone()));

    Router::new()
        .nest(
            domain_secretariats::handlers::URL,
            domain_secretariats::handlers::router(Arc::new(secretariats)),
        )
        .nest(
            domain_accountables::handlers::URL,
            domain_accountables::handlers::router(Arc::new(accountables)),
        )
        .nest(
            domain_projects::handlers::URL,
            domain_projects::handlers::router(Arc::new(projects)),
        )
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
