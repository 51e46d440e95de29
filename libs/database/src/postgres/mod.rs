//! PostgreSQL connection management, migrations, health and transactions.

mod config;
mod connector;
mod health;
mod transaction;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, run_migrations};
pub use health::check_health;
pub use transaction::{TransactionFuture, transactional};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DatabaseTransaction, DbErr};
pub use sea_orm_migration::MigratorTrait;
