//! Projects Domain
//!
//! Work items with a lifecycle status (`TODO`, `IN_PROGRESS`, `DONE`) and
//! planned versus actual dates. Besides full replacement, a project's status
//! can be changed on its own through `PATCH /projects/{id}/status`.
//!
//! ## Architecture
//!
//! ```text
//! handlers ──► ProjectPort ──► use_cases ──► ProjectRepository
//!                  │                              ▲
//!                  └── ProjectUnitOfWork ─────────┘
//! ```
//!
//! `mapper` converts between request/response DTOs, commands and records.

pub mod commands;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod port;
pub mod postgres;
pub mod project_accountables;
pub mod repository;
pub mod use_cases;

pub use error::{ProjectError, ProjectResult};
pub use handlers::ApiDoc;
pub use models::{Project, ProjectRequest, ProjectResponse, ProjectSort, ProjectStatus};
pub use port::{ProjectPort, ProjectService};
pub use postgres::{PgProjectRepository, PgProjectUnitOfWork};
pub use repository::{InMemoryProjectRepository, ProjectRepository, ProjectUnitOfWork};
