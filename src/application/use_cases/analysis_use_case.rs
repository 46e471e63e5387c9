// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::dto::{
        analysis_request::{AnalysisListQueryDto, AnalyzeRequestDto},
        analysis_response::AnalysisPageDto,
    },
    domain::{
        models::analysis::Analysis,
        repositories::analysis_repository::{
            AnalysisQueryParams, AnalysisRepository, RepositoryError,
        },
    },
    infrastructure::metrics::ANALYSES_SUBMITTED,
    queue::analysis_queue::{AnalysisJob, AnalysisQueue, QueueError},
};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use url::Url;
use uuid::Uuid;
use validator::Validate;

#[derive(Error, Debug)]
pub enum AnalysisUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),
    #[error("Analysis not found")]
    NotFound,
}

pub struct AnalysisUseCase<R, Q> {
    repository: Arc<R>,
    queue: Arc<Q>,
}

impl<R, Q> AnalysisUseCase<R, Q>
where
    R: AnalysisRepository + 'static,
    Q: AnalysisQueue + 'static,
{
    pub fn new(repository: Arc<R>, queue: Arc<Q>) -> Self {
        Self { repository, queue }
    }

    /// 提交分析
    ///
    /// 创建 Pending 记录并入队后立即返回，不等待抓取或规则执行。
    pub async fn submit(&self, dto: AnalyzeRequestDto) -> Result<Analysis, AnalysisUseCaseError> {
        dto.validate()
            .map_err(|e| AnalysisUseCaseError::ValidationError(e.to_string()))?;
        let url = normalize_url(&dto.url)?;

        let analysis = self.repository.create(&Analysis::new(url)).await?;

        if let Err(e) = self
            .queue
            .enqueue(AnalysisJob {
                analysis_id: analysis.id,
            })
            .await
        {
            // Nobody will ever pick this record up
            let mut orphan = analysis.clone();
            if orphan.fail(e.to_string()).is_ok() {
                if let Err(save_err) = self.repository.save(&orphan).await {
                    error!("Failed to mark unqueued analysis as failed: {}", save_err);
                }
            }
            return Err(e.into());
        }

        counter!(ANALYSES_SUBMITTED).increment(1);
        info!(analysis_id = %analysis.id, url = %analysis.url, "Analysis submitted");
        Ok(analysis)
    }

    /// 分页查询历史记录
    pub async fn list(
        &self,
        query: AnalysisListQueryDto,
    ) -> Result<AnalysisPageDto, AnalysisUseCaseError> {
        query
            .validate()
            .map_err(|e| AnalysisUseCaseError::ValidationError(e.to_string()))?;

        let (items, total) = self
            .repository
            .list(AnalysisQueryParams {
                skip: query.skip(),
                limit: query.limit(),
            })
            .await?;

        Ok(AnalysisPageDto::new(items, total, query.page(), query.limit()))
    }

    /// 查询单条记录
    pub async fn get(&self, id: Uuid) -> Result<Analysis, AnalysisUseCaseError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AnalysisUseCaseError::NotFound)
    }
}

/// 只接受 http/https 且带主机名的地址，原样保留用户输入（去除首尾空白）
fn normalize_url(raw: &str) -> Result<String, AnalysisUseCaseError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| AnalysisUseCaseError::ValidationError(format!("invalid url: {}", e)))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(trimmed.to_string()),
        "http" | "https" => Err(AnalysisUseCaseError::ValidationError(
            "url must include a host".to_string(),
        )),
        other => Err(AnalysisUseCaseError::ValidationError(format!(
            "unsupported url scheme: {}",
            other
        ))),
    }
}

#[cfg(test)]
#[path = "analysis_use_case_test.rs"]
mod tests;
