// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;
use wcagrs::domain::models::analysis::Analysis;
use wcagrs::domain::repositories::analysis_repository::AnalysisRepository;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app.server().get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version() {
    let app = create_test_app().await;
    let body: Value = app.server().get("/api/version").await.json();

    assert_eq!(body["name"], "wcagrs");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_submit_returns_pending_summary() {
    let app = create_test_app().await;
    let response = app
        .server()
        .post("/api/analyze")
        // Unroutable target; the test only checks the immediate response
        .json(&json!({ "url": "http://127.0.0.1:9/" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["url"], "http://127.0.0.1:9/");
    assert_eq!(body["status"], "pending");
    assert!(body["createdAt"].is_string());

    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    assert!(app.repository.find_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_submit_rejects_invalid_url() {
    let app = create_test_app().await;
    let server = app.server();

    for url in ["not-a-url", "ftp://example.com/"] {
        let response = server.post("/api/analyze").json(&json!({ "url": url })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("Validation failed"));
    }

    let (_, total) = app
        .repository
        .list(wcagrs::domain::repositories::analysis_repository::AnalysisQueryParams {
            skip: 0,
            limit: 10,
        })
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_get_unknown_analysis_is_404() {
    let app = create_test_app().await;
    let response = app
        .server()
        .get(&format!("/api/analyses/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Analysis not found" }));
}

#[tokio::test]
async fn test_get_with_malformed_id_is_400() {
    let app = create_test_app().await;
    let response = app.server().get("/api/analyses/not-a-uuid").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_paging() {
    let app = create_test_app().await;
    for i in 0..3 {
        app.repository
            .create(&Analysis::new(format!("https://example.com/{}", i)))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let body: Value = app
        .server()
        .get("/api/analyses")
        .add_query_param("page", 2)
        .add_query_param("limit", 2)
        .await
        .json();

    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["totalPages"], 2);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "https://example.com/0");
}

#[tokio::test]
async fn test_list_defaults_and_limits() {
    let app = create_test_app().await;
    let server = app.server();

    let body: Value = server.get("/api/analyses").await.json();
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total"], 0);
    assert_eq!(body["totalPages"], 0);

    server
        .get("/api/analyses")
        .add_query_param("limit", 101)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/api/analyses")
        .add_query_param("page", 0)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
