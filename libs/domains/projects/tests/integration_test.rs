//! Integration tests for Projects domain
//!
//! Run against PostgreSQL via testcontainers with the workspace migrations.

use chrono::{Duration, TimeZone, Utc};
use domain_projects::*;
use sea_orm::ConnectionTrait;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

fn request(name: String) -> ProjectRequest {
    ProjectRequest {
        name,
        status: ProjectStatus::Todo,
        expected_start: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        expected_end: Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap(),
        start_actual: None,
        end_actual: None,
        days_late: 2,
        percentage_of_time_remaining: 25.7,
        secretariat_id: None,
    }
}

#[tokio::test]
async fn test_create_round_trips_every_column() {
    let db = TestDatabase::new().await;
    let service = ProjectService::new(PgProjectUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("project_round_trip");

    let secretariat = db
        .create_test_secretariat(builder.uuid("secretariat"), "Planning")
        .await;
    let started = Utc.with_ymd_and_hms(2025, 1, 3, 9, 30, 0).unwrap();

    let created = service
        .create(ProjectRequest {
            status: ProjectStatus::InProgress,
            start_actual: Some(started),
            secretariat_id: Some(secretariat),
            ..request(builder.name("project", "portal"))
        })
        .await
        .unwrap();

    let found = service.find(created.uuid).await.unwrap();
    assert_uuid_eq(found.uuid, created.uuid, "project uuid");
    assert_eq!(found.status, ProjectStatus::InProgress);
    assert_eq!(found.start_actual, Some(started));
    assert_eq!(found.end_actual, None);
    assert_eq!(found.days_late, 2);
    assert_eq!(found.percentage_of_time_remaining, 25.7);
    assert_eq!(found.secretariat_id, Some(secretariat));
}

#[tokio::test]
async fn test_status_is_stored_as_text() {
    let db = TestDatabase::new().await;
    let service = ProjectService::new(PgProjectUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("project_status_text");

    let created = service
        .create(request(builder.name("project", "status")))
        .await
        .unwrap();
    service
        .change_status(created.uuid, ProjectStatus::InProgress)
        .await
        .unwrap();

    let row = db
        .connection
        .query_one_raw(sea_orm::Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            format!("SELECT status FROM project WHERE uuid = '{}'", created.uuid),
        ))
        .await
        .unwrap()
        .unwrap();
    let status: String = row.try_get("", "status").unwrap();
    assert_eq!(status, "IN_PROGRESS");
}

#[tokio::test]
async fn test_change_status_leaves_other_columns() {
    let db = TestDatabase::new().await;
    let service = ProjectService::new(PgProjectUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("project_change_status");

    let created = service
        .create(request(builder.name("project", "patch")))
        .await
        .unwrap();

    let changed = service
        .change_status(created.uuid, ProjectStatus::Done)
        .await
        .unwrap();

    assert_eq!(changed.status, ProjectStatus::Done);
    assert_eq!(changed.name, created.name);
    assert_eq!(changed.expected_end, created.expected_end);
    assert_eq!(changed.days_late, created.days_late);
    assert_eq!(changed.created_at, created.created_at);
    assert!(changed.updated_at >= created.updated_at);

    // Back to TODO is allowed
    let reopened = service
        .change_status(created.uuid, ProjectStatus::Todo)
        .await
        .unwrap();
    assert_eq!(reopened.status, ProjectStatus::Todo);
}

#[tokio::test]
async fn test_list_by_expected_start_across_pages() {
    let db = TestDatabase::new().await;
    let service = ProjectService::new(PgProjectUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("project_list_pages");
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    for i in 0..5 {
        service
            .create(ProjectRequest {
                expected_start: base + Duration::days(10 - i),
                ..request(builder.name("project", &i.to_string()))
            })
            .await
            .unwrap();
    }

    let mut seen = Vec::new();
    for page in 0..3 {
        let result = service
            .list(app_core::PageParams {
                page,
                size: 2,
                sort: Some("expectedStart".into()),
            })
            .await
            .unwrap();
        assert_eq!(result.total_elements, 5);
        assert_eq!(result.total_pages, 3);
        seen.extend(result.content);
    }

    let uuids: Vec<Uuid> = seen.iter().map(|p| p.uuid).collect();
    assert_unique(&uuids, "project uuids");
    assert!(seen.windows(2).all(|w| w[0].expected_start <= w[1].expected_start));
}

#[tokio::test]
async fn test_change_status_unknown_uuid_is_not_found() {
    let db = TestDatabase::new().await;
    let service = ProjectService::new(PgProjectUnitOfWork::new(db.connection()));

    let result = service
        .change_status(Uuid::new_v4(), ProjectStatus::Done)
        .await;

    assert!(matches!(result, Err(ProjectError::NotFound(_))));
}

#[tokio::test]
async fn test_deleting_secretariat_detaches_project() {
    let db = TestDatabase::new().await;
    let service = ProjectService::new(PgProjectUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("project_detach");

    let secretariat = db
        .create_test_secretariat(builder.uuid("secretariat"), "Works")
        .await;
    let created = service
        .create(ProjectRequest {
            secretariat_id: Some(secretariat),
            ..request(builder.name("project", "bridge"))
        })
        .await
        .unwrap();

    db.connection
        .execute_unprepared(&format!("DELETE FROM secretariat WHERE uuid = '{}'", secretariat))
        .await
        .unwrap();

    let found = service.find(created.uuid).await.unwrap();
    assert_eq!(found.secretariat_id, None);
    assert_eq!(db.count_rows("project").await, 1);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    let service = ProjectService::new(PgProjectUnitOfWork::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("project_delete");

    let created = service
        .create(request(builder.name("project", "gone")))
        .await
        .unwrap();
    service.delete(created.uuid).await.unwrap();

    assert_eq!(db.count_rows("project").await, 0);
    assert!(matches!(
        service.delete(created.uuid).await,
        Err(ProjectError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_assignments_follow_project_lifecycle() {
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, ModelTrait};

    let db = TestDatabase::new().await;
    let conn = db.connection();
    let service = ProjectService::new(PgProjectUnitOfWork::new(conn.clone()));
    let builder = TestDataBuilder::from_test_name("project_assignments");

    let created = service
        .create(request(builder.name("project", "staffed")))
        .await
        .unwrap();
    let project_id = PgProjectRepository::new(&conn)
        .find_by_uuid(created.uuid)
        .await
        .unwrap()
        .and_then(|p| p.id)
        .unwrap();

    let accountable_id: i64 = conn
        .query_one_raw(sea_orm::Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            format!(
                "INSERT INTO accountable (uuid, name, email, role) \
                 VALUES ('{}', 'Ana', 'ana@example.com', 'Dev') RETURNING id",
                builder.uuid("accountable")
            ),
        ))
        .await
        .unwrap()
        .unwrap()
        .try_get("", "id")
        .unwrap();

    let assignment = project_accountables::ActiveModel {
        project_id: Set(project_id),
        accountable_id: Set(accountable_id),
        ..Default::default()
    };
    assignment.clone().insert(&conn).await.unwrap();
    assert!(assignment.insert(&conn).await.is_err(), "pair is unique");

    let project = entity::Entity::find_by_id(project_id)
        .one(&conn)
        .await
        .unwrap()
        .unwrap();
    let assigned = project
        .find_related(project_accountables::Entity)
        .all(&conn)
        .await
        .unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].accountable_id, accountable_id);
    assert_eq!(
        project_accountables::of_project(project_id).all(&conn).await.unwrap(),
        assigned
    );

    service.delete(created.uuid).await.unwrap();
    assert_eq!(db.count_rows("project_accountables").await, 0);
    assert_eq!(db.count_rows("accountable").await, 1);
}
