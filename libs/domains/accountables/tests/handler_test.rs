//! Handler tests for Accountables domain
//!
//! Drive the router against the in-memory unit of work: status codes,
//! validation problems and the e-mail conflict.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_accountables::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::TestDataBuilder;
use tower::ServiceExt;

fn app() -> Router {
    let service = AccountableService::new(InMemoryAccountableRepository::new());
    handlers::router(Arc::new(service))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_accountable_returns_201() {
    let builder = TestDataBuilder::from_test_name("accountable_create_201");
    let secretariat = builder.uuid("secretariat");

    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "Ana Souza",
                "email": builder.email("ana"),
                "role": "Product Owner",
                "secretariatId": secretariat,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Ana Souza");
    assert_eq!(body["email"], builder.email("ana"));
    assert_eq!(body["secretariatId"], secretariat.to_string());
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn test_create_without_secretariat_omits_field() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Ana", "email": "ana@example.com", "role": "Dev" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = json_body(response.into_body()).await;
    assert!(body.get("secretariatId").is_none());
}

#[tokio::test]
async fn test_create_accountable_validates_input() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "", "email": "nope", "role": "r".repeat(51) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let problem: Value = json_body(response.into_body()).await;
    let errors: Vec<String> = serde_json::from_value(problem["errors"].clone()).unwrap();
    assert_eq!(errors.len(), 3);
    assert!(errors[0].starts_with("email:"));
    assert!(errors[1].starts_with("name:"));
    assert!(errors[2].starts_with("role:"));
}

#[tokio::test]
async fn test_duplicate_email_in_other_case_returns_409() {
    let app = app();

    let first = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Ana", "email": "ana@example.com", "role": "Dev" }),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Ana Two", "email": "ANA@EXAMPLE.COM", "role": "QA" }),
        ))
        .await
        .unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let problem: Value = json_body(second.into_body()).await;
    assert_eq!(problem["status"], 409);
    assert_eq!(problem["detail"], "E-mail already registered");
}

#[tokio::test]
async fn test_update_and_delete_accountable() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Ana", "email": "ana@example.com", "role": "Dev" }),
        ))
        .await
        .unwrap();
    let created: AccountableResponse = json_body(response.into_body()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.uuid),
            json!({ "name": "Ana Souza", "email": "ana@example.com", "role": "Lead" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: AccountableResponse = json_body(response.into_body()).await;
    assert_eq!(updated.uuid, created.uuid);
    assert_eq!(updated.role, "Lead");

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/{}", created.uuid)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.uuid)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_sorted_by_email() {
    let app = app();
    for (name, email) in [("A", "c@example.com"), ("B", "a@example.com"), ("C", "b@example.com")] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/",
                json!({ "name": name, "email": email, "role": "Dev" }),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(empty_request("GET", "/?sort=email,asc&size=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: Value = json_body(response.into_body()).await;
    assert_eq!(page["content"][0]["email"], "a@example.com");
    assert_eq!(page["content"][1]["email"], "b@example.com");
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
}

#[tokio::test]
async fn test_unknown_sort_property_returns_400() {
    let response = app()
        .oneshot(empty_request("GET", "/?sort=secretariatId"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let problem: Value = json_body(response.into_body()).await;
    assert_eq!(problem["detail"], "Unknown sort property 'secretariatId'");
}
