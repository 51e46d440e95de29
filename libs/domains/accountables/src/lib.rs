//! Accountables Domain
//!
//! People responsible for projects, identified externally by UUID and
//! unique by e-mail regardless of case.
//!
//! Layers follow the other domains: `handlers` → `port` → `use_cases` →
//! `repository`, with `mapper` converting between them.
//!
//! ```rust,no_run
//! use domain_accountables::{handlers, AccountableService, InMemoryAccountableRepository};
//! use std::sync::Arc;
//!
//! let service = AccountableService::new(InMemoryAccountableRepository::new());
//! let router = handlers::router(Arc::new(service));
//! ```

pub mod commands;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod port;
pub mod postgres;
pub mod repository;
pub mod use_cases;

pub use error::{AccountableError, AccountableResult};
pub use handlers::ApiDoc;
pub use models::{Accountable, AccountableRequest, AccountableResponse, AccountableSort};
pub use port::{AccountablePort, AccountableService};
pub use postgres::{PgAccountableRepository, PgAccountableUnitOfWork};
pub use repository::{AccountableRepository, AccountableUnitOfWork, InMemoryAccountableRepository};
