use app_core::{Sort, SortDirection};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::SecretariatResult;
use crate::models::{Secretariat, SecretariatSort};

/// Repository trait for Secretariat persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretariatRepository: Send + Sync {
    /// Find a secretariat by its business UUID
    async fn find_by_uuid(&self, uuid: Uuid) -> SecretariatResult<Option<Secretariat>>;

    /// One ordered slice of secretariats
    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
        sort: Sort<SecretariatSort>,
    ) -> SecretariatResult<Vec<Secretariat>>;

    async fn count(&self) -> SecretariatResult<u64>;

    /// Insert when `id` is `None`, otherwise replace the stored row
    async fn save(&self, secretariat: Secretariat) -> SecretariatResult<Secretariat>;

    /// Delete by internal id
    async fn delete(&self, id: i64) -> SecretariatResult<()>;
}

/// Boxed repository work borrowing the repository for `'r`.
pub type RepositoryFuture<'r, T> = Pin<Box<dyn Future<Output = SecretariatResult<T>> + Send + 'r>>;

/// Hands a repository to a unit of work.
///
/// `read` runs against the plain connection; `transactional` runs inside one
/// transaction that commits on `Ok` and rolls back on `Err`.
pub trait SecretariatUnitOfWork: Send + Sync + 'static {
    fn read<T, F>(&self, work: F) -> impl Future<Output = SecretariatResult<T>> + Send
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn SecretariatRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static;

    fn transactional<T, F>(
        &self,
        operation: &'static str,
        work: F,
    ) -> impl Future<Output = SecretariatResult<T>> + Send
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn SecretariatRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static;
}

/// In-memory implementation of SecretariatRepository (for development/testing)
///
/// Also serves as its own unit of work. Writes are applied immediately, so a
/// failing unit of work does not roll back what it already saved.
#[derive(Debug, Default, Clone)]
pub struct InMemorySecretariatRepository {
    secretariats: Arc<RwLock<HashMap<i64, Secretariat>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemorySecretariatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Secretariat, b: &Secretariat, sort: Sort<SecretariatSort>) -> Ordering {
    let ordering = match sort.property {
        SecretariatSort::Name => a.name.cmp(&b.name),
        SecretariatSort::CreatedAt => a.created_at.cmp(&b.created_at),
        SecretariatSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    let ordering = match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };
    ordering.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl SecretariatRepository for InMemorySecretariatRepository {
    async fn find_by_uuid(&self, uuid: Uuid) -> SecretariatResult<Option<Secretariat>> {
        let secretariats = self.secretariats.read().await;
        Ok(secretariats.values().find(|s| s.uuid == uuid).cloned())
    }

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
        sort: Sort<SecretariatSort>,
    ) -> SecretariatResult<Vec<Secretariat>> {
        let secretariats = self.secretariats.read().await;

        let mut result: Vec<Secretariat> = secretariats.values().cloned().collect();
        result.sort_by(|a, b| compare(a, b, sort));

        Ok(result
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self) -> SecretariatResult<u64> {
        let secretariats = self.secretariats.read().await;
        Ok(secretariats.len() as u64)
    }

    async fn save(&self, mut secretariat: Secretariat) -> SecretariatResult<Secretariat> {
        let mut secretariats = self.secretariats.write().await;

        match secretariat.id {
            Some(id) => {
                tracing::info!(secretariat_uuid = %secretariat.uuid, "Updated secretariat");
                secretariats.insert(id, secretariat.clone());
            }
            None => {
                let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
                secretariat.id = Some(id);
                tracing::info!(secretariat_uuid = %secretariat.uuid, "Created secretariat");
                secretariats.insert(id, secretariat.clone());
            }
        }

        Ok(secretariat)
    }

    async fn delete(&self, id: i64) -> SecretariatResult<()> {
        let mut secretariats = self.secretariats.write().await;

        if let Some(removed) = secretariats.remove(&id) {
            tracing::info!(secretariat_uuid = %removed.uuid, "Deleted secretariat");
        }
        Ok(())
    }
}

impl SecretariatUnitOfWork for InMemorySecretariatRepository {
    async fn read<T, F>(&self, work: F) -> SecretariatResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn SecretariatRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        let repository: &dyn SecretariatRepository = self;
        work(repository).await
    }

    async fn transactional<T, F>(&self, operation: &'static str, work: F) -> SecretariatResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn SecretariatRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        tracing::debug!(operation, "Running in-memory unit of work");
        let repository: &dyn SecretariatRepository = self;
        work(repository).await
    }
}
