// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dom::DomParser;
use crate::domain::models::analysis::{Analysis, AnalysisStatus, DomainError, ProgressUpdate};
use crate::domain::models::rule_result::AnalysisResults;
use crate::domain::repositories::analysis_repository::{AnalysisRepository, RepositoryError};
use crate::domain::rules::WcagAnalyser;
use crate::domain::services::progress_notifier::ProgressNotifier;
use crate::engines::traits::FetchEngine;
use crate::infrastructure::metrics::{ANALYSES_FAILED, ANALYSES_FINISHED, ANALYSIS_DURATION};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// 导致分析进入 Failed 的原因，`Display` 即写入记录的错误信息
#[derive(Error, Debug)]
enum AnalysisFailure {
    /// 目标返回非 2xx，携带状态文本
    #[error("{0}")]
    Fetch(String),
    /// 网络层失败
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Store(#[from] RepositoryError),
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// 分析编排器
///
/// 驱动单个分析记录走完 Pending → Fetching → Ongoing → Finished/Failed，
/// 每次转换先持久化，再推送进度。
pub struct AnalysisOrchestrator<R: AnalysisRepository> {
    repository: Arc<R>,
    engine: Arc<dyn FetchEngine>,
    parser: Arc<dyn DomParser>,
    analyser: Arc<WcagAnalyser>,
    notifier: Arc<dyn ProgressNotifier>,
}

impl<R: AnalysisRepository> AnalysisOrchestrator<R> {
    /// 创建新的编排器实例
    ///
    /// # 参数
    ///
    /// * `repository` - 分析记录仓库
    /// * `engine` - 页面抓取引擎
    /// * `parser` - HTML 解析器
    /// * `analyser` - 规则分析器
    /// * `notifier` - 进度通知器
    pub fn new(
        repository: Arc<R>,
        engine: Arc<dyn FetchEngine>,
        parser: Arc<dyn DomParser>,
        analyser: Arc<WcagAnalyser>,
        notifier: Arc<dyn ProgressNotifier>,
    ) -> Self {
        Self {
            repository,
            engine,
            parser,
            analyser,
            notifier,
        }
    }

    /// 执行一次分析
    ///
    /// 记录不存在时静默返回；所有失败（包括读取记录失败）都落到记录的
    /// Failed 状态上，此方法本身不返回错误。
    #[instrument(skip(self), fields(url = tracing::field::Empty))]
    pub async fn run(&self, analysis_id: Uuid) {
        let mut analysis = match self.repository.find_by_id(analysis_id).await {
            Ok(Some(analysis)) => analysis,
            Ok(None) => {
                warn!("Analysis not found, skipping");
                return;
            }
            Err(e) => {
                error!("Failed to load analysis: {}", e);
                counter!(ANALYSES_FAILED).increment(1);
                let mut unloaded = Self::unloaded(analysis_id);
                self.record_failure(&mut unloaded, AnalysisFailure::Store(e))
                    .await;
                return;
            }
        };
        tracing::Span::current().record("url", analysis.url.as_str());

        if analysis.status != AnalysisStatus::Pending {
            warn!(status = %analysis.status, "Analysis already started, skipping");
            return;
        }

        let start = Instant::now();
        match self.drive(&mut analysis).await {
            Ok(()) => {
                counter!(ANALYSES_FINISHED).increment(1);
                info!("Analysis finished");
            }
            Err(failure) => {
                counter!(ANALYSES_FAILED).increment(1);
                warn!(error = %failure, "Analysis failed");
                self.record_failure(&mut analysis, failure).await;
            }
        }
        histogram!(ANALYSIS_DURATION).record(start.elapsed().as_secs_f64());
    }

    async fn drive(&self, analysis: &mut Analysis) -> Result<(), AnalysisFailure> {
        self.transition(analysis, Analysis::start_fetching).await?;

        let response = self
            .engine
            .fetch(&analysis.url)
            .await
            .map_err(|e| AnalysisFailure::Transport(e.to_string()))?;
        if !response.is_success() {
            return Err(AnalysisFailure::Fetch(response.status_text));
        }
        debug!(
            status = response.status_code,
            content_type = %response.content_type,
            elapsed_ms = response.response_time_ms,
            engine = self.engine.name(),
            "Page fetched"
        );

        self.transition(analysis, Analysis::start_evaluating).await?;

        let results = self.evaluate(&response.content);
        self.transition(analysis, |a| a.finish(results)).await?;
        Ok(())
    }

    // Document is not Send, so it must not live across an await
    fn evaluate(&self, html: &str) -> AnalysisResults {
        let document = self.parser.parse_from_string(html);
        self.analyser.analyse(&document)
    }

    /// 在副本上应用转换，持久化成功后才替换当前记录并推送
    async fn transition<F>(&self, analysis: &mut Analysis, apply: F) -> Result<(), AnalysisFailure>
    where
        F: FnOnce(&mut Analysis) -> Result<(), DomainError>,
    {
        let mut next = analysis.clone();
        apply(&mut next)?;
        *analysis = self.repository.save(&next).await?;
        debug!(status = %analysis.status, "Analysis transitioned");
        self.publish(analysis);
        Ok(())
    }

    // save 只写入状态相关字段，其余字段无需真实值
    fn unloaded(analysis_id: Uuid) -> Analysis {
        Analysis {
            id: analysis_id,
            ..Analysis::new(String::new())
        }
    }

    async fn record_failure(&self, analysis: &mut Analysis, failure: AnalysisFailure) {
        let mut failed = analysis.clone();
        if let Err(e) = failed.fail(failure.to_string()) {
            error!("Cannot mark analysis as failed: {}", e);
            return;
        }

        match self.repository.save(&failed).await {
            Ok(saved) => {
                *analysis = saved;
                self.publish(analysis);
            }
            Err(e) => error!("Failed to persist failed state: {}", e),
        }
    }

    fn publish(&self, analysis: &Analysis) {
        self.notifier
            .notify(analysis.id, &ProgressUpdate::from(analysis));
    }
}

#[cfg(test)]
#[path = "analysis_orchestrator_test.rs"]
mod tests;
