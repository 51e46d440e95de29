//! Connection cleanup run during graceful shutdown.

use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Closes the PostgreSQL pool, logging the outcome.
///
/// ```ignore
/// let cleanup = close_postgres(db.clone(), "main");
/// create_production_app(router, &server, timeout, cleanup).await?;
/// ```
pub async fn close_postgres(db: DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
