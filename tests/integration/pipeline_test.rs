// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;
use wcagrs::domain::models::analysis::AnalysisStatus;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "text/html")
                .set_body_string(body),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn submit(app: &super::helpers::TestApp, url: String) -> Uuid {
    let response = app
        .server()
        .post("/api/analyze")
        .json(&json!({ "url": url }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_accessible_page_finishes_with_all_rules_passing() {
    let target = MockServer::start().await;
    mount_page(
        &target,
        "/good",
        200,
        r#"<!DOCTYPE html><html><head><title>Test</title></head><body>
             <img src="logo.png" alt="x">
             <label for="a">A</label><input id="a">
           </body></html>"#,
    )
    .await;

    let app = create_test_app().await;
    let id = submit(&app, format!("{}/good", target.uri())).await;

    let analysis = app.wait_for_terminal(id).await;
    assert_eq!(analysis.status, AnalysisStatus::Finished);
    let results = analysis.results.unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.values().all(|r| r.passed));

    let body: Value = app
        .server()
        .get(&format!("/api/analyses/{}", id))
        .await
        .json();
    assert_eq!(body["status"], "finished");
    assert_eq!(body["results"]["title-check"]["details"]["title"], "Test");
    assert!(body.get("errorMessage").is_none());
}

#[tokio::test]
async fn test_inaccessible_page_reports_failing_rules() {
    let target = MockServer::start().await;
    mount_page(
        &target,
        "/bad",
        200,
        r#"<html><body><img src="a.png"><input type="text"></body></html>"#,
    )
    .await;

    let app = create_test_app().await;
    let id = submit(&app, format!("{}/bad", target.uri())).await;

    let analysis = app.wait_for_terminal(id).await;
    assert_eq!(analysis.status, AnalysisStatus::Finished);
    let results = analysis.results.unwrap();
    assert!(!results["title-check"].passed);
    assert!(!results["img-alt-check"].passed);
    assert_eq!(
        results["img-alt-check"].details.as_ref().unwrap()["imagesWithoutAlt"],
        1
    );
    assert!(!results["input-label-check"].passed);
    assert_eq!(
        results["input-label-check"].details.as_ref().unwrap()["inputsWithoutLabel"],
        1
    );
}

#[tokio::test]
async fn test_missing_page_fails_with_status_text() {
    let target = MockServer::start().await;
    mount_page(&target, "/gone", 404, "nothing here").await;

    let app = create_test_app().await;
    let id = submit(&app, format!("{}/gone", target.uri())).await;

    let analysis = app.wait_for_terminal(id).await;
    assert_eq!(analysis.status, AnalysisStatus::Failed);
    assert_eq!(analysis.error_message.as_deref(), Some("Not Found"));
    assert!(analysis.results.is_none());
}

#[tokio::test]
async fn test_many_concurrent_submissions_all_terminate() {
    let target = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<title>Concurrent</title>"),
        )
        .mount(&target)
        .await;

    let app = create_test_app().await;
    let mut ids = Vec::new();
    for i in 0..10 {
        ids.push(submit(&app, format!("{}/page/{}", target.uri(), i)).await);
    }

    for id in ids {
        let analysis = app.wait_for_terminal(id).await;
        assert_eq!(analysis.status, AnalysisStatus::Finished);
        assert!(analysis.results.unwrap()["title-check"].passed);
    }
}

#[tokio::test]
async fn test_worker_shutdown_lets_in_flight_analysis_finish() {
    let target = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<title>Slow</title>")
                .set_delay(std::time::Duration::from_millis(300)),
        )
        .mount(&target)
        .await;

    let mut app = create_test_app().await;
    let id = submit(&app, format!("{}/slow", target.uri())).await;

    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(5);
    loop {
        let body: Value = app
            .server()
            .get(&format!("/api/analyses/{}", id))
            .await
            .json();
        if body["status"] != "pending" {
            break;
        }
        assert!(tokio::time::Instant::now() < deadline, "job never picked up");
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    app.worker_manager.shutdown();

    let analysis = app.wait_for_terminal(id).await;
    assert_eq!(analysis.status, AnalysisStatus::Finished);
}
