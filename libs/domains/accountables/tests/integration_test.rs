//! Integration tests for Accountables domain
//!
//! Real PostgreSQL via testcontainers:
//! - the `lower(email)` unique index backs the conflict check
//! - the secretariat reference is enforced and nulled on delete

use axum_helpers::AppError;
use domain_accountables::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

fn request(builder: &TestDataBuilder, local: &str) -> AccountableRequest {
    AccountableRequest {
        name: builder.name("accountable", local),
        email: builder.email(local),
        role: "Developer".to_string(),
        secretariat_id: None,
    }
}

#[tokio::test]
async fn test_create_and_find_with_secretariat() {
    let db = TestDatabase::new().await;
    let service = AccountableService::new(PgAccountableUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("accountable_with_secretariat");

    let secretariat = db
        .create_test_secretariat(builder.uuid("secretariat"), "Finance")
        .await;

    let created = service
        .create(AccountableRequest {
            secretariat_id: Some(secretariat),
            ..request(&builder, "ana")
        })
        .await
        .unwrap();

    let found = service.find(created.uuid).await.unwrap();
    assert_uuid_eq(found.uuid, created.uuid, "accountable uuid");
    assert_eq!(found.email, builder.email("ana"));
    assert_eq!(found.secretariat_id, Some(secretariat));
}

#[tokio::test]
async fn test_email_conflict_ignores_case() {
    let db = TestDatabase::new().await;
    let service = AccountableService::new(PgAccountableUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("accountable_email_case");

    service.create(request(&builder, "ana")).await.unwrap();

    let shouting = AccountableRequest {
        email: builder.email("ana").to_uppercase(),
        ..request(&builder, "ana")
    };
    let result = service.create(shouting).await;

    assert!(matches!(
        result,
        Err(AccountableError::EmailAlreadyRegistered(_))
    ));
    assert_eq!(db.count_rows("accountable").await, 1);
}

#[tokio::test]
async fn test_unique_index_rejects_insert_that_skipped_the_check() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let repo = PgAccountableRepository::new(&conn);
    let now = chrono::Utc::now();

    let accountable = |email: &str| Accountable {
        id: None,
        uuid: Uuid::new_v4(),
        name: "Ana".to_string(),
        email: email.to_string(),
        role: "Dev".to_string(),
        secretariat_id: None,
        created_at: now,
        updated_at: now,
    };

    repo.save(accountable("ana@example.com")).await.unwrap();
    let err = repo
        .save(accountable("Ana@Example.com"))
        .await
        .unwrap_err()
        .on_duplicate_email("Ana@Example.com");

    assert!(matches!(err, AccountableError::EmailAlreadyRegistered(_)));
}

#[tokio::test]
async fn test_concurrent_creates_with_same_email_leave_one_row() {
    let db = TestDatabase::new().await;
    let service = AccountableService::new(PgAccountableUnitOfWork::new(db.connection()));

    let lower = AccountableRequest {
        name: "Ana".to_string(),
        email: "race@example.com".to_string(),
        role: "Dev".to_string(),
        secretariat_id: None,
    };
    let upper = AccountableRequest {
        email: "RACE@example.com".to_string(),
        ..lower.clone()
    };

    let (first, second) = tokio::join!(service.create(lower), service.create(upper));

    assert_eq!(
        [first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(),
        1
    );
    let failure = first.err().or(second.err());
    assert!(matches!(
        failure,
        Some(AccountableError::EmailAlreadyRegistered(_))
    ));
    assert_eq!(db.count_rows("accountable").await, 1);
}

#[tokio::test]
async fn test_unknown_secretariat_is_a_bad_request() {
    let db = TestDatabase::new().await;
    let service = AccountableService::new(PgAccountableUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("accountable_bad_reference");

    let err = service
        .create(AccountableRequest {
            secretariat_id: Some(Uuid::new_v4()),
            ..request(&builder, "ana")
        })
        .await
        .unwrap_err();

    let problem = AppError::from(err).to_problem();
    assert_eq!(problem.status, 400);
    assert_eq!(db.count_rows("accountable").await, 0);
}

#[tokio::test]
async fn test_deleting_secretariat_detaches_accountable() {
    let db = TestDatabase::new().await;
    let service = AccountableService::new(PgAccountableUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("accountable_detach");

    let secretariat = db
        .create_test_secretariat(builder.uuid("secretariat"), "Health")
        .await;
    let created = service
        .create(AccountableRequest {
            secretariat_id: Some(secretariat),
            ..request(&builder, "bia")
        })
        .await
        .unwrap();

    use sea_orm::ConnectionTrait;
    db.connection
        .execute_unprepared(&format!("DELETE FROM secretariat WHERE uuid = '{}'", secretariat))
        .await
        .unwrap();

    let found = service.find(created.uuid).await.unwrap();
    assert_eq!(found.secretariat_id, None);
}
