use app_core::{Sort, SortDirection};
use async_trait::async_trait;
use database::postgres::transactional;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::ProjectResult,
    models::{Project, ProjectSort},
    repository::{ProjectRepository, ProjectUnitOfWork, RepositoryFuture},
};

/// Project repository over any SeaORM connection, pooled or transactional.
pub struct PgProjectRepository<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> PgProjectRepository<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

fn sort_column(property: ProjectSort) -> entity::Column {
    match property {
        ProjectSort::Name => entity::Column::Name,
        ProjectSort::Status => entity::Column::Status,
        ProjectSort::ExpectedStart => entity::Column::ExpectedStart,
        ProjectSort::ExpectedEnd => entity::Column::ExpectedEnd,
        ProjectSort::CreatedAt => entity::Column::CreatedAt,
        ProjectSort::UpdatedAt => entity::Column::UpdatedAt,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl<'c, C> ProjectRepository for PgProjectRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_uuid(&self, uuid: Uuid) -> ProjectResult<Option<Project>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Uuid.eq(uuid))
            .one(self.conn)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
        sort: Sort<ProjectSort>,
    ) -> ProjectResult<Vec<Project>> {
        let models = entity::Entity::find()
            .order_by(sort_column(sort.property), sort_order(sort.direction))
            .order_by_asc(entity::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> ProjectResult<u64> {
        Ok(entity::Entity::find().count(self.conn).await?)
    }

    async fn save(&self, project: Project) -> ProjectResult<Project> {
        let is_new = project.id.is_none();
        let active_model: entity::ActiveModel = project.into();

        let model = if is_new {
            let model = active_model.insert(self.conn).await?;
            tracing::info!(project_uuid = %model.uuid, status = %model.status, "Created project");
            model
        } else {
            let model = active_model.update(self.conn).await?;
            tracing::info!(project_uuid = %model.uuid, status = %model.status, "Updated project");
            model
        };

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> ProjectResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(self.conn).await?;

        if result.rows_affected > 0 {
            tracing::info!(project_id = id, "Deleted project");
        }
        Ok(())
    }
}

/// Unit of work backed by the connection pool
#[derive(Clone)]
pub struct PgProjectUnitOfWork {
    db: DatabaseConnection,
}

impl PgProjectUnitOfWork {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProjectUnitOfWork for PgProjectUnitOfWork {
    async fn read<T, F>(&self, work: F) -> ProjectResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn ProjectRepository) -> RepositoryFuture<'r, T> + Send + 'static,
    {
        let repository = PgProjectRepository::new(&self.db);
        work(&repository).await
    }

    async fn transactional<T, F>(&self, operation: &'static str, work: F) -> ProjectResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn ProjectRepository) -> RepositoryFuture<'r, T> + Send + 'static,
    {
        transactional(&self.db, operation, move |txn| {
            Box::pin(async move {
                let repository = PgProjectRepository::new(txn);
                work(&repository).await
            })
        })
        .await
    }
}
