// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use std::collections::BTreeMap;
use std::time::Duration;
use uuid::Uuid;
use wcagrs::domain::models::analysis::{Analysis, AnalysisStatus};
use wcagrs::domain::models::rule_result::RuleResult;
use wcagrs::domain::repositories::analysis_repository::{
    AnalysisQueryParams, AnalysisRepository, RepositoryError,
};
use wcagrs::infrastructure::repositories::analysis_repo_impl::AnalysisRepositoryImpl;

#[tokio::test]
async fn test_create_and_find_round_trip() {
    let repo = AnalysisRepositoryImpl::new(create_test_db().await);
    let analysis = Analysis::new("https://example.com");

    let created = repo.create(&analysis).await.unwrap();
    assert_eq!(created.status, AnalysisStatus::Pending);

    let found = repo.find_by_id(analysis.id).await.unwrap().unwrap();
    assert_eq!(found.id, analysis.id);
    assert_eq!(found.url, "https://example.com");
    assert_eq!(found.status, AnalysisStatus::Pending);
    assert!(found.results.is_none());
    assert!(found.error_message.is_none());
}

#[tokio::test]
async fn test_find_unknown_id_returns_none() {
    let repo = AnalysisRepositoryImpl::new(create_test_db().await);
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_persists_transitions_and_bumps_updated_at() {
    let repo = AnalysisRepositoryImpl::new(create_test_db().await);
    let mut analysis = repo.create(&Analysis::new("https://example.com")).await.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    analysis.start_fetching().unwrap();
    let saved = repo.save(&analysis).await.unwrap();
    assert!(saved.updated_at > analysis.created_at);

    let mut analysis = saved;
    analysis.start_evaluating().unwrap();
    let mut results = BTreeMap::new();
    results.insert(
        "title-check".to_string(),
        RuleResult::new(true)
            .with_message("Title exists and is not empty")
            .with_details(&serde_json::json!({ "title": "Home" })),
    );
    analysis.finish(results.clone()).unwrap();
    repo.save(&analysis).await.unwrap();

    let found = repo.find_by_id(analysis.id).await.unwrap().unwrap();
    assert_eq!(found.status, AnalysisStatus::Finished);
    assert_eq!(found.results, Some(results));
    assert_eq!(found.created_at, analysis.created_at);
}

#[tokio::test]
async fn test_save_failed_record_keeps_error_message() {
    let repo = AnalysisRepositoryImpl::new(create_test_db().await);
    let mut analysis = repo.create(&Analysis::new("https://example.com")).await.unwrap();

    analysis.start_fetching().unwrap();
    analysis.fail("Not Found").unwrap();
    repo.save(&analysis).await.unwrap();

    let found = repo.find_by_id(analysis.id).await.unwrap().unwrap();
    assert_eq!(found.status, AnalysisStatus::Failed);
    assert_eq!(found.error_message.as_deref(), Some("Not Found"));
    assert!(found.results.is_none());
}

#[tokio::test]
async fn test_save_unknown_record_is_not_found() {
    let repo = AnalysisRepositoryImpl::new(create_test_db().await);
    let result = repo.save(&Analysis::new("https://example.com")).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_list_is_newest_first_and_paged() {
    let repo = AnalysisRepositoryImpl::new(create_test_db().await);
    let mut ids = Vec::new();
    for i in 0..5 {
        let analysis = Analysis::new(format!("https://example.com/{}", i));
        ids.push(analysis.id);
        repo.create(&analysis).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let (first_page, total) = repo
        .list(AnalysisQueryParams { skip: 0, limit: 2 })
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(
        first_page.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![ids[4], ids[3]]
    );

    let (last_page, total) = repo
        .list(AnalysisQueryParams { skip: 4, limit: 2 })
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].id, ids[0]);
}
