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

use crate::error::AccountableResult;
use crate::models::{Accountable, AccountableSort};

/// Repository trait for Accountable persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountableRepository: Send + Sync {
    async fn find_by_uuid(&self, uuid: Uuid) -> AccountableResult<Option<Accountable>>;

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
        sort: Sort<AccountableSort>,
    ) -> AccountableResult<Vec<Accountable>>;

    async fn count(&self) -> AccountableResult<u64>;

    /// Insert when `id` is `None`, otherwise replace the stored row
    async fn save(&self, accountable: Accountable) -> AccountableResult<Accountable>;

    async fn delete(&self, id: i64) -> AccountableResult<()>;

    /// Whether any accountable holds `email`, compared case-insensitively
    async fn exists_by_email_ignore_case(&self, email: &str) -> AccountableResult<bool>;
}

pub type RepositoryFuture<'r, T> =
    Pin<Box<dyn Future<Output = AccountableResult<T>> + Send + 'r>>;

/// Hands a repository to a unit of work; see `transactional` for writes.
pub trait AccountableUnitOfWork: Send + Sync + 'static {
    fn read<T, F>(&self, work: F) -> impl Future<Output = AccountableResult<T>> + Send
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn AccountableRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static;

    /// Commits when `work` returns `Ok`, rolls back otherwise.
    fn transactional<T, F>(
        &self,
        operation: &'static str,
        work: F,
    ) -> impl Future<Output = AccountableResult<T>> + Send
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn AccountableRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static;
}

/// In-memory implementation of AccountableRepository (for development/testing)
///
/// Acts as its own unit of work without rollback.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountableRepository {
    accountables: Arc<RwLock<HashMap<i64, Accountable>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryAccountableRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Accountable, b: &Accountable, sort: Sort<AccountableSort>) -> Ordering {
    let ordering = match sort.property {
        AccountableSort::Name => a.name.cmp(&b.name),
        AccountableSort::Email => a.email.cmp(&b.email),
        AccountableSort::Role => a.role.cmp(&b.role),
        AccountableSort::CreatedAt => a.created_at.cmp(&b.created_at),
        AccountableSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    let ordering = match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };
    ordering.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl AccountableRepository for InMemoryAccountableRepository {
    async fn find_by_uuid(&self, uuid: Uuid) -> AccountableResult<Option<Accountable>> {
        let accountables = self.accountables.read().await;
        Ok(accountables.values().find(|a| a.uuid == uuid).cloned())
    }

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
        sort: Sort<AccountableSort>,
    ) -> AccountableResult<Vec<Accountable>> {
        let accountables = self.accountables.read().await;

        let mut result: Vec<Accountable> = accountables.values().cloned().collect();
        result.sort_by(|a, b| compare(a, b, sort));

        Ok(result
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self) -> AccountableResult<u64> {
        Ok(self.accountables.read().await.len() as u64)
    }

    async fn save(&self, mut accountable: Accountable) -> AccountableResult<Accountable> {
        let mut accountables = self.accountables.write().await;

        match accountable.id {
            Some(id) => {
                tracing::info!(accountable_uuid = %accountable.uuid, "Updated accountable");
                accountables.insert(id, accountable.clone());
            }
            None => {
                let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
                accountable.id = Some(id);
                tracing::info!(accountable_uuid = %accountable.uuid, "Created accountable");
                accountables.insert(id, accountable.clone());
            }
        }

        Ok(accountable)
    }

    async fn delete(&self, id: i64) -> AccountableResult<()> {
        if let Some(removed) = self.accountables.write().await.remove(&id) {
            tracing::info!(accountable_uuid = %removed.uuid, "Deleted accountable");
        }
        Ok(())
    }

    async fn exists_by_email_ignore_case(&self, email: &str) -> AccountableResult<bool> {
        let accountables = self.accountables.read().await;
        let email = email.to_lowercase();
        Ok(accountables
            .values()
            .any(|a| a.email.to_lowercase() == email))
    }
}

impl AccountableUnitOfWork for InMemoryAccountableRepository {
    async fn read<T, F>(&self, work: F) -> AccountableResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn AccountableRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        let repository: &dyn AccountableRepository = self;
        work(repository).await
    }

    async fn transactional<T, F>(&self, operation: &'static str, work: F) -> AccountableResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn AccountableRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        tracing::debug!(operation, "Running in-memory unit of work");
        let repository: &dyn AccountableRepository = self;
        work(repository).await
    }
}
