mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .nest("/api", gym_admin::api::routes::protected_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── CREATE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_member_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server.post("/api/members").json(&common::member_body()).await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Member added successfully.");
    assert!(body["data"]["id"].is_i64());
    assert_eq!(body["data"]["firstName"], "Jane");
    assert_eq!(body["data"]["membershipEndDate"], "2024-02-15");
    assert_eq!(body["data"]["pricing"], 700);
}

#[sqlx::test]
async fn test_create_member_missing_field_rejected(pool: PgPool) {
    let server = make_server(pool.clone());

    let mut payload = common::member_body();
    payload.as_object_mut().unwrap().remove("email");

    let response = server.post("/api/members").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All required fields must be provided.");
    assert!(body.get("data").is_none());

    // A rejected create must not leave a partial row behind.
    assert_eq!(common::members_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_member_empty_field_rejected(pool: PgPool) {
    let server = make_server(pool.clone());

    let mut payload = common::member_body();
    payload["phoneNumber"] = json!("");

    let response = server.post("/api/members").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(common::members_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_member_malformed_date_rejected(pool: PgPool) {
    let server = make_server(pool.clone());

    let mut payload = common::member_body();
    payload["joiningDate"] = json!("10/01/2024");

    let response = server.post("/api/members").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(common::members_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_member_fills_pricing_from_table(pool: PgPool) {
    let server = make_server(pool);

    let mut payload = common::member_body();
    payload["membershipType"] = json!("Quarterly");
    payload.as_object_mut().unwrap().remove("pricing");

    let response = server.post("/api/members").json(&payload).await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"]["pricing"], 2000);
}

// ─── GET ──────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_member_success(pool: PgPool) {
    let id = common::insert_test_member(&pool, "solo@example.com", common::future_date(), 700).await;
    let server = make_server(pool);

    let response = server.get(&format!("/api/members/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Member fetched successfully.");
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["email"], "solo@example.com");
    assert_eq!(body["data"]["membershipType"], "Monthly");
}

#[sqlx::test]
async fn test_get_member_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/members/999999").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Member not found.");
}

// ─── UPDATE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_member_success(pool: PgPool) {
    let id = common::insert_test_member(&pool, "old@example.com", common::future_date(), 700).await;
    let server = make_server(pool);

    let mut payload = common::member_body();
    payload["email"] = json!("new@example.com");

    let response = server.put(&format!("/api/members/{id}")).json(&payload).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Member updated successfully.");
    assert_eq!(body["data"]["email"], "new@example.com");
    assert_eq!(body["data"]["id"], id);
}

#[sqlx::test]
async fn test_update_member_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .put("/api/members/999999")
        .json(&common::member_body())
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_member_invalid_payload_rejected(pool: PgPool) {
    let id = common::insert_test_member(&pool, "keep@example.com", common::future_date(), 700).await;
    let server = make_server(pool.clone());

    let mut payload = common::member_body();
    payload.as_object_mut().unwrap().remove("gender");

    let response = server.put(&format!("/api/members/{id}")).json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // The record must stay untouched after a rejected update.
    let email: String = sqlx::query_scalar("SELECT email FROM members WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(email, "keep@example.com");
}

// ─── LIST ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_member_list_projection(pool: PgPool) {
    common::insert_test_member(&pool, "a@example.com", common::future_date(), 700).await;
    common::insert_test_member(&pool, "b@example.com", common::past_date(), 2000).await;
    let server = make_server(pool);

    let response = server.get("/api/members").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Members retrieved successfully.");

    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    // The listing exposes only the reduced projection.
    let first = &items[0];
    assert!(first.get("id").is_some());
    assert!(first.get("firstName").is_some());
    assert!(first.get("lastName").is_some());
    assert!(first.get("email").is_some());
    assert!(first.get("phoneNumber").is_some());
    assert!(first.get("membershipEndDate").is_some());
    assert!(first.get("gender").is_none());
    assert!(first.get("pricing").is_none());
    assert!(first.get("membershipStartDate").is_none());
}

#[sqlx::test]
async fn test_member_list_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/members").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

// ─── METHOD NOT ALLOWED ───────────────────────────────────────────────────────

#[sqlx::test]
async fn test_members_method_not_allowed(pool: PgPool) {
    let server = make_server(pool);

    let response = server.delete("/api/members").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header("allow"), "GET, POST");

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Method DELETE Not Allowed");
}

#[sqlx::test]
async fn test_member_detail_method_not_allowed(pool: PgPool) {
    let id = common::insert_test_member(&pool, "c@example.com", common::future_date(), 700).await;
    let server = make_server(pool);

    let response = server.delete(&format!("/api/members/{id}")).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header("allow"), "GET, PUT");

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Method DELETE Not Allowed");
}
