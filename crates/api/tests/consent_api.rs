//! Integration tests for the consent endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_accept_then_list_returns_it(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/consent", json!({"action": "accept"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["ok"], true);
    let id = created["id"].as_str().expect("id must be a string");
    assert!(!id.is_empty());

    let response = get(app, "/api/consent?limit=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let listing = body_json(response).await;
    assert_eq!(listing["ok"], true);
    assert_eq!(listing["count"], 1);
    assert_eq!(listing["data"][0]["action"], "accept");
    assert_eq!(listing["data"][0]["id"], id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_without_action_is_rejected_with_no_write(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/consent",
        json!({"principal_identifier": "subject@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "missing_action");

    let listing = body_json(get(app, "/api/consent").await).await;
    assert_eq!(listing["count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn essential_category_is_forced_true(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/consent",
        json!({
            "action": "partial",
            "categories": {"essential": false, "analytics": true}
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let listing = body_json(get(app, "/api/consent").await).await;
    let categories = &listing["data"][0]["categories"];
    assert_eq!(categories["essential"], true);
    assert_eq!(categories["analytics"], true);
    assert_eq!(categories["functional"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_metadata_is_captured_from_headers(pool: PgPool) {
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, USER_AGENT};
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/consent")
        .header(CONTENT_TYPE, "application/json")
        .header(USER_AGENT, "integration-test/1.0")
        .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
        .body(Body::from(json!({"action": "accept"}).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let listing = body_json(get(app, "/api/consent").await).await;
    assert_eq!(listing["data"][0]["ip"], "203.0.113.9");
    assert_eq!(listing["data"][0]["user_agent"], "integration-test/1.0");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ip_falls_back_to_socket_address_without_forwarded_header(pool: PgPool) {
    use std::net::SocketAddr;

    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let app = common::build_test_app(pool);

    let addr: SocketAddr = "192.0.2.10:54321".parse().unwrap();
    let mut request = Request::builder()
        .method(Method::POST)
        .uri("/api/consent")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"action": "accept"}).to_string()))
        .unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let listing = body_json(get(app, "/api/consent").await).await;
    assert_eq!(listing["data"][0]["ip"], "192.0.2.10");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_limit_is_clamped_and_garbage_falls_back(pool: PgPool) {
    let app = common::build_test_app(pool);

    for _ in 0..2 {
        let response = post_json(app.clone(), "/api/consent", json!({"action": "accept"})).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listing = body_json(get(app.clone(), "/api/consent?limit=1").await).await;
    assert_eq!(listing["count"], 1);

    // Unparsable limit falls back to the default instead of failing.
    let listing = body_json(get(app.clone(), "/api/consent?limit=abc").await).await;
    assert_eq!(listing["count"], 2);

    // Oversized limit is clamped, not an error.
    let listing = body_json(get(app, "/api/consent?limit=99999").await).await;
    assert_eq!(listing["count"], 2);
}
