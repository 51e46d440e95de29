//! Integration tests for Secretariats domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Queries, ordering and paging work against the migrated schema
//! - Transactions commit and roll back as expected
//! - Deleting a secretariat detaches its references

use app_core::{PageParams, Sort, SortDirection};
use domain_secretariats::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

fn request(name: &str) -> SecretariatRequest {
    SecretariatRequest {
        name: name.to_string(),
        description: Some("Integration test".to_string()),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_find_secretariat() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let repo = PgSecretariatRepository::new(&conn);
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let now = chrono::Utc::now();
    let record = Secretariat {
        id: None,
        uuid: builder.uuid("finance"),
        name: builder.name("secretariat", "finance"),
        description: None,
        created_at: now,
        updated_at: now,
    };

    let saved = repo.save(record.clone()).await.unwrap();
    assert!(saved.id.is_some());

    let found = assert_some(repo.find_by_uuid(record.uuid).await.unwrap(), "saved row");
    assert_uuid_eq(found.uuid, record.uuid, "secretariat uuid");
    assert_eq!(found.name, record.name);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_page_orders_in_database() {
    let db = TestDatabase::new().await;
    let service = SecretariatService::new(PgSecretariatUnitOfWork::new(db.connection()));

    for name in ["Charlie", "Alpha", "Bravo"] {
        service.create(request(name)).await.unwrap();
    }

    let conn = db.connection();
    let repo = PgSecretariatRepository::new(&conn);
    let names: Vec<String> = repo
        .find_page(
            0,
            10,
            Sort {
                property: SecretariatSort::Name,
                direction: SortDirection::Desc,
            },
        )
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, ["Charlie", "Bravo", "Alpha"]);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_service_lifecycle() {
    let db = TestDatabase::new().await;
    let service = SecretariatService::new(PgSecretariatUnitOfWork::new(db.connection()));

    let created = service.create(request("Finance")).await.unwrap();
    assert!(!created.uuid.is_nil());

    let updated = service
        .update(
            created.uuid,
            SecretariatRequest {
                name: "Finance Dept".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.uuid, created.uuid);
    assert_eq!(updated.name, "Finance Dept");
    assert_eq!(updated.created_at, created.created_at);

    let found = service.find(created.uuid).await.unwrap();
    assert_eq!(found.name, "Finance Dept");
    assert_eq!(found.description, None);

    service.delete(created.uuid).await.unwrap();
    assert!(matches!(
        service.find(created.uuid).await,
        Err(SecretariatError::NotFound(_))
    ));
    assert_eq!(db.count_rows("secretariat").await, 0);
}

#[tokio::test]
async fn test_not_found_for_unknown_uuid() {
    let db = TestDatabase::new().await;
    let service = SecretariatService::new(PgSecretariatUnitOfWork::new(db.connection()));
    let unknown = Uuid::new_v4();

    assert!(matches!(
        service.find(unknown).await,
        Err(SecretariatError::NotFound(_))
    ));
    assert!(matches!(
        service.update(unknown, request("x")).await,
        Err(SecretariatError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(unknown).await,
        Err(SecretariatError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_rejects_offset_postgres_cannot_bind() {
    let db = TestDatabase::new().await;
    let service = SecretariatService::new(PgSecretariatUnitOfWork::new(db.connection()));

    let result = service
        .list(PageParams {
            page: 9_223_372_036_854_776,
            size: 1000,
            sort: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(SecretariatError::Paging(app_core::PagingError::PageOutOfRange { .. }))
    ));
}

#[tokio::test]
async fn test_pages_cover_all_records() {
    let db = TestDatabase::new().await;
    let service = SecretariatService::new(PgSecretariatUnitOfWork::new(db.connection()));

    for i in 0..11 {
        service.create(request(&format!("S{:02}", i))).await.unwrap();
    }

    let mut names = Vec::new();
    for page in 0..3 {
        let result = service
            .list(PageParams {
                page,
                size: 4,
                sort: Some("name".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(result.total_elements, 11);
        assert_eq!(result.total_pages, 3);
        names.extend(result.content.into_iter().map(|s| s.name));
    }

    assert_unique(&names, "paged names");
    let expected: Vec<String> = (0..11).map(|i| format!("S{:02}", i)).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_failed_unit_of_work_rolls_back() {
    let db = TestDatabase::new().await;
    let uow = PgSecretariatUnitOfWork::new(db.connection());

    let result: SecretariatResult<()> = uow
        .transactional("secretariat.test_rollback", |repo| {
            Box::pin(async move {
                let now = chrono::Utc::now();
                repo.save(Secretariat {
                    id: None,
                    uuid: Uuid::new_v4(),
                    name: "Doomed".to_string(),
                    description: None,
                    created_at: now,
                    updated_at: now,
                })
                .await?;
                Err(SecretariatError::NotFound(Uuid::nil()))
            })
        })
        .await;

    assert!(result.is_err());
    assert_eq!(db.count_rows("secretariat").await, 0);
}
