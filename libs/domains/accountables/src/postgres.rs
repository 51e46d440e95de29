use app_core::{Sort, SortDirection};
use async_trait::async_trait;
use database::postgres::transactional;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::AccountableResult,
    models::{Accountable, AccountableSort},
    repository::{AccountableRepository, AccountableUnitOfWork, RepositoryFuture},
};

/// Accountable repository over any SeaORM connection, pooled or transactional.
pub struct PgAccountableRepository<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> PgAccountableRepository<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

fn sort_column(property: AccountableSort) -> entity::Column {
    match property {
        AccountableSort::Name => entity::Column::Name,
        AccountableSort::Email => entity::Column::Email,
        AccountableSort::Role => entity::Column::Role,
        AccountableSort::CreatedAt => entity::Column::CreatedAt,
        AccountableSort::UpdatedAt => entity::Column::UpdatedAt,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl<'c, C> AccountableRepository for PgAccountableRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_uuid(&self, uuid: Uuid) -> AccountableResult<Option<Accountable>> {
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
        sort: Sort<AccountableSort>,
    ) -> AccountableResult<Vec<Accountable>> {
        let models = entity::Entity::find()
            .order_by(sort_column(sort.property), sort_order(sort.direction))
            .order_by_asc(entity::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> AccountableResult<u64> {
        Ok(entity::Entity::find().count(self.conn).await?)
    }

    async fn save(&self, accountable: Accountable) -> AccountableResult<Accountable> {
        let is_new = accountable.id.is_none();
        let active_model: entity::ActiveModel = accountable.into();

        let model = if is_new {
            let model = active_model.insert(self.conn).await?;
            tracing::info!(accountable_uuid = %model.uuid, "Created accountable");
            model
        } else {
            let model = active_model.update(self.conn).await?;
            tracing::info!(accountable_uuid = %model.uuid, "Updated accountable");
            model
        };

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> AccountableResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(self.conn).await?;

        if result.rows_affected > 0 {
            tracing::info!(accountable_id = id, "Deleted accountable");
        }
        Ok(())
    }

    async fn exists_by_email_ignore_case(&self, email: &str) -> AccountableResult<bool> {
        // Matches the lower(email) unique index
        let matches = entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Email)))
                    .eq(email.to_lowercase()),
            )
            .count(self.conn)
            .await?;

        Ok(matches > 0)
    }
}

/// Unit of work backed by the connection pool
#[derive(Clone)]
pub struct PgAccountableUnitOfWork {
    db: DatabaseConnection,
}

impl PgAccountableUnitOfWork {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AccountableUnitOfWork for PgAccountableUnitOfWork {
    async fn read<T, F>(&self, work: F) -> AccountableResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn AccountableRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        let repository = PgAccountableRepository::new(&self.db);
        work(&repository).await
    }

    async fn transactional<T, F>(&self, operation: &'static str, work: F) -> AccountableResult<T>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r dyn AccountableRepository) -> RepositoryFuture<'r, T>
            + Send
            + 'static,
    {
        transactional(&self.db, operation, move |txn| {
            Box::pin(async move {
                let repository = PgAccountableRepository::new(txn);
                work(&repository).await
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i64, email: &str) -> entity::Model {
        let now = Utc::now().fixed_offset();
        entity::Model {
            id,
            uuid: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: email.to_string(),
            role: "Dev".to_string(),
            secretariat_id: Some(Uuid::new_v4()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_uuid_keeps_secretariat_reference() {
        let row = model(2, "ana@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let repo = PgAccountableRepository::new(&db);

        let found = repo.find_by_uuid(row.uuid).await.unwrap().unwrap();

        assert_eq!(found.id, Some(2));
        assert_eq!(found.secretariat_id, row.secretariat_id);
    }

    #[tokio::test]
    async fn test_exists_by_email_queries_lowercased() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(1)]])
            .into_connection();
        let repo = PgAccountableRepository::new(&db);

        assert!(repo.exists_by_email_ignore_case("Ana@Example.COM").await.unwrap());

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("LOWER"));
        assert!(log.contains("ana@example.com"));
    }

    fn count_row(n: i64) -> std::collections::BTreeMap<&'static str, sea_orm::Value> {
        std::collections::BTreeMap::from([("num_items", sea_orm::Value::BigInt(Some(n)))])
    }
}
