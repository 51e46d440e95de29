use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Boxed unit of work borrowing the open transaction.
pub type TransactionFuture<'c, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>;

/// Runs `work` inside a single database transaction.
///
/// The transaction commits when `work` returns `Ok` and rolls back when it
/// returns `Err`; the result is passed through unchanged. Each run is tagged
/// with a fresh `tx_id` in the logs. Dropping the returned future before it
/// completes drops the open transaction, which rolls it back.
///
/// ```ignore
/// use database::postgres::transactional;
///
/// let saved = transactional(&db, "secretariat.create", |txn| {
///     Box::pin(async move { record.insert(txn).await })
/// })
/// .await?;
/// ```
pub async fn transactional<T, E, F>(db: &DatabaseConnection, operation: &str, work: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TransactionFuture<'c, T, E> + Send,
    T: Send,
    E: From<DbErr> + Display + Send,
{
    let tx_id = Uuid::new_v4();
    debug!(%tx_id, operation, "Starting transaction");

    let txn = db.begin().await?;

    match work(&txn).await {
        Ok(value) => {
            txn.commit().await?;
            info!(%tx_id, operation, "Transaction committed");
            Ok(value)
        }
        Err(err) => {
            warn!(%tx_id, operation, error = %err, "Rolling back transaction");
            if let Err(rollback_err) = txn.rollback().await {
                error!(%tx_id, operation, error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_transactional_returns_work_result_on_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result: Result<u32, DbErr> =
            transactional(&db, "test.ok", |_txn| Box::pin(async move { Ok(42) })).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_transactional_propagates_work_error_unchanged() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result: Result<u32, DbErr> = transactional(&db, "test.err", |_txn| {
            Box::pin(async move { Err(DbErr::Custom("boom".to_string())) })
        })
        .await;

        match result {
            Err(DbErr::Custom(message)) => assert_eq!(message, "boom"),
            other => panic!("expected custom error, got {:?}", other),
        }
    }
}
