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
    error::SecretariatResult,
    models::{Secretariat, SecretariatSort},
    repository::{RepositoryFuture, SecretariatRepository, SecretariatUnitOfWork},
};

/// Secretariat repository over any SeaORM connection, pooled or transactional.
pub struct PgSecretariatRepository<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> PgSecretariatRepository<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

fn sort_column(property: SecretariatSort) -> entity::Column {
    match property {
        SecretariatSort::Name => entity::Column::Name,
        SecretariatSort::CreatedAt => entity::Column::CreatedAt,
        SecretariatSort::UpdatedAt => entity::Column::UpdatedAt,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl<'c, C> SecretariatRepository for PgSecretariatRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_uuid(&self, uuid: Uuid) -> SecretariatResult<Option<Secretariat>> {
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
        sort: Sort<SecretariatSort>,
    ) -> SecretariatResult<Vec<Secretariat>> {
        let models = entity::Entity::find()
            .order_by(sort_column(sort.property), sort_order(sort.direction))
            .order_by_asc(entity::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> SecretariatResult<u64> {
        Ok(entity::Entity::find().count(self.conn).await?)
    }

    async fn save(&self, secretariat: Secretariat) -> SecretariatResult<Secretariat> {
        let is_new = secretariat.id.is_none();
        let active_model: entity::ActiveModel = secretariat.into();

        let model = if is_new {
            let model = active_model.insert(self.conn).await?;
            tracing::info!(secretariat_uuid = %model.uuid, "Created secretariat");
            model
        } else {
            let model = active_model.update(self.conn).await?;
            tracing::info!(secretariat_uuid = %model.uuid, "Updated secretariat");
            model
        };

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> SecretariatResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(self.conn).await?;

        if result.rows_affected > 0 {
            tracing::info!(secretariat_id = id, "Deleted secretariat");
        }
        Ok(())
    }
}

/// Unit of work backed by the connection pool
#[derive(Clone)]
pub struct PgSecretariatUnitOfWork {
    db: DatabaseConnection,
}

impl PgSecretariatUnitOfWork {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SecretariatUnitOfWork for PgSecretariatUnitOfWork {
    async fn read<T, F>(&self, work: F) -> SecretariatResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn SecretariatRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        let repository = PgSecretariatRepository::new(&self.db);
        work(&repository).await
    }

    async fn transactional<T, F>(&self, operation: &'static str, work: F) -> SecretariatResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn SecretariatRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        transactional(&self.db, operation, move |txn| {
            Box::pin(async move {
                let repository = PgSecretariatRepository::new(txn);
                work(&repository).await
            })
        })
        .await
    }
}
