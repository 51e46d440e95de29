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

use crate::error::ProjectResult;
use crate::models::{Project, ProjectSort};

/// Repository trait for Project persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_uuid(&self, uuid: Uuid) -> ProjectResult<Option<Project>>;

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
        sort: Sort<ProjectSort>,
    ) -> ProjectResult<Vec<Project>>;

    async fn count(&self) -> ProjectResult<u64>;

    /// Insert when `id` is `None`, otherwise replace the stored row
    async fn save(&self, project: Project) -> ProjectResult<Project>;

    async fn delete(&self, id: i64) -> ProjectResult<()>;
}

pub type RepositoryFuture<'r, T> = Pin<Box<dyn Future<Output = ProjectResult<T>> + Send + 'r>>;

/// Hands a repository to a unit of work; see `transactional` for commit rules.
pub trait ProjectUnitOfWork: Send + Sync + 'static {
    fn read<T, F>(&self, work: F) -> impl Future<Output = ProjectResult<T>> + Send
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn ProjectRepository) -> RepositoryFuture<'r, T> + Send + 'static;

    /// Commits on `Ok`, rolls back on `Err`.
    fn transactional<T, F>(
        &self,
        operation: &'static str,
        work: F,
    ) -> impl Future<Output = ProjectResult<T>> + Send
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn ProjectRepository) -> RepositoryFuture<'r, T> + Send + 'static;
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<i64, Project>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Project, b: &Project, sort: Sort<ProjectSort>) -> Ordering {
    let ordering = match sort.property {
        ProjectSort::Name => a.name.cmp(&b.name),
        // Same order as the varchar column
        ProjectSort::Status => a.status.as_ref().cmp(b.status.as_ref()),
        ProjectSort::ExpectedStart => a.expected_start.cmp(&b.expected_start),
        ProjectSort::ExpectedEnd => a.expected_end.cmp(&b.expected_end),
        ProjectSort::CreatedAt => a.created_at.cmp(&b.created_at),
        ProjectSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    let ordering = match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };
    ordering.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_uuid(&self, uuid: Uuid) -> ProjectResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.values().find(|p| p.uuid == uuid).cloned())
    }

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
        sort: Sort<ProjectSort>,
    ) -> ProjectResult<Vec<Project>> {
        let projects = self.projects.read().await;

        let mut result: Vec<Project> = projects.values().cloned().collect();
        result.sort_by(|a, b| compare(a, b, sort));

        Ok(result
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self) -> ProjectResult<u64> {
        Ok(self.projects.read().await.len() as u64)
    }

    async fn save(&self, mut project: Project) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;

        let id = match project.id {
            Some(id) => {
                tracing::info!(project_uuid = %project.uuid, status = %project.status, "Updated project");
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
                project.id = Some(id);
                tracing::info!(project_uuid = %project.uuid, "Created project");
                id
            }
        };
        projects.insert(id, project.clone());

        Ok(project)
    }

    async fn delete(&self, id: i64) -> ProjectResult<()> {
        if let Some(removed) = self.projects.write().await.remove(&id) {
            tracing::info!(project_uuid = %removed.uuid, "Deleted project");
        }
        Ok(())
    }
}

impl ProjectUnitOfWork for InMemoryProjectRepository {
    async fn read<T, F>(&self, work: F) -> ProjectResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn ProjectRepository) -> RepositoryFuture<'r, T> + Send + 'static,
    {
        let repository: &dyn ProjectRepository = self;
        work(repository).await
    }

    async fn transactional<T, F>(&self, operation: &'static str, work: F) -> ProjectResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn ProjectRepository) -> RepositoryFuture<'r, T> + Send + 'static,
    {
        tracing::debug!(operation, "Running in-memory unit of work");
        let repository: &dyn ProjectRepository = self;
        work(repository).await
    }
}
