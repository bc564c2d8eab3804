//! Category resource against a real PostgreSQL schema.
//!
//! Requires `DATABASE_URL`. Ignored by default; run with `cargo test -- --ignored`.

mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create(server: &common::TestServer, body: Value) -> Value {
    let resp = server
        .client
        .post(server.url("/categories"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

async fn count(server: &common::TestServer) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(server.pool())
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn create_then_get_returns_the_same_fields() {
    let server = common::spawn_with_db().await;

    let created = create(
        &server,
        json!({ "category_id": 999, "name": "Work", "description": "Work tasks" }),
    )
    .await;
    let id = created["category_id"].as_i64().unwrap();
    assert_ne!(id, 999, "client-supplied id must be ignored");
    assert_eq!(created["name"], "Work");
    assert_eq!(created["description"], "Work tasks");

    let fetched: Value = server
        .client
        .get(server.url(&format!("/categories/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        fetched,
        json!({ "category_id": id, "name": "Work", "description": "Work tasks" })
    );

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn list_on_empty_store_is_not_found() {
    let server = common::spawn_with_db().await;

    let resp = server
        .client
        .get(server.url("/categories"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.bytes().await.unwrap().is_empty());

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn list_returns_every_category_in_id_order() {
    let server = common::spawn_with_db().await;

    create(&server, json!({ "name": "Work" })).await;
    create(&server, json!({ "name": "Home", "description": "Chores" })).await;

    let list: Vec<Value> = server
        .client
        .get(server.url("/categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = list.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Work", "Home"]);
    assert_eq!(list[0]["description"], Value::Null);

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn update_overwrites_name_and_description() {
    let server = common::spawn_with_db().await;

    let created = create(&server, json!({ "name": "Work", "description": "Old" })).await;
    let id = created["category_id"].as_i64().unwrap();

    let resp = server
        .client
        .put(server.url("/categories"))
        .json(&json!({ "category_id": id, "name": "Office" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.bytes().await.unwrap().is_empty());

    let fetched: Value = server
        .client
        .get(server.url(&format!("/categories/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Office");
    assert_eq!(fetched["description"], Value::Null);

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn update_of_missing_category_is_not_found_and_changes_nothing() {
    let server = common::spawn_with_db().await;

    let created = create(&server, json!({ "name": "Work" })).await;
    let id = created["category_id"].as_i64().unwrap();

    let resp = server
        .client
        .put(server.url("/categories"))
        .json(&json!({ "category_id": id + 100, "name": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(count(&server).await, 1);

    let fetched: Value = server
        .client
        .get(server.url(&format!("/categories/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Work");

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn update_with_long_name_is_rejected_and_changes_nothing() {
    let server = common::spawn_with_db().await;

    let created = create(&server, json!({ "name": "Work" })).await;
    let id = created["category_id"].as_i64().unwrap();

    let resp = server
        .client
        .put(server.url("/categories"))
        .json(&json!({ "category_id": id, "name": "x".repeat(51) }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let name: String = sqlx::query_scalar("SELECT name FROM categories WHERE category_id = $1")
        .bind(id as i32)
        .fetch_one(server.pool())
        .await
        .unwrap();
    assert_eq!(name, "Work");

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn delete_removes_and_second_delete_is_not_found() {
    let server = common::spawn_with_db().await;

    let created = create(&server, json!({ "name": "Work" })).await;
    let id = created["category_id"].as_i64().unwrap();
    let path = format!("/categories/{}", id);

    let resp = server.client.delete(server.url(&path)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = server.client.get(server.url(&path)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = server.client.delete(server.url(&path)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn get_of_missing_category_is_not_found() {
    let server = common::spawn_with_db().await;

    let resp = server
        .client
        .get(server.url("/categories/4242"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    server.cleanup().await;
}

#[tokio::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn health_is_ok_with_a_reachable_database() {
    let server = common::spawn_with_db().await;

    let resp = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));

    server.cleanup().await;
}
