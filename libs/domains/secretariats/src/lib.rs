//! Secretariats Domain
//!
//! Organizational units that accountables and projects belong to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Port     │  ← DTO ↔ command mapping, unit of work per call
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← One per operation, error classification
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and Postgres)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_secretariats::{handlers, InMemorySecretariatRepository, SecretariatService};
//! use std::sync::Arc;
//!
//! let service = SecretariatService::new(InMemorySecretariatRepository::new());
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

pub use error::{SecretariatError, SecretariatResult};
pub use handlers::ApiDoc;
pub use models::{Secretariat, SecretariatRequest, SecretariatResponse, SecretariatSort};
pub use port::{SecretariatPort, SecretariatService};
pub use postgres::{PgSecretariatRepository, PgSecretariatUnitOfWork};
pub use repository::{InMemorySecretariatRepository, SecretariatRepository, SecretariatUnitOfWork};
