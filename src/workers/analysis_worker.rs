// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::analysis_repository::AnalysisRepository;
use crate::domain::services::analysis_orchestrator::AnalysisOrchestrator;
use crate::queue::analysis_queue::AnalysisJob;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// 分析工作器
///
/// 从队列中取出任务，每个任务在独立的 tokio 任务中运行到终态，
/// 互不等待。
pub struct AnalysisWorker<R: AnalysisRepository> {
    orchestrator: Arc<AnalysisOrchestrator<R>>,
}

impl<R: AnalysisRepository + 'static> AnalysisWorker<R> {
    pub fn new(orchestrator: Arc<AnalysisOrchestrator<R>>) -> Self {
        Self { orchestrator }
    }

    /// 消费任务直到所有发送端关闭
    pub async fn run(self, mut receiver: mpsc::UnboundedReceiver<AnalysisJob>) {
        info!("Analysis worker started");
        while let Some(job) = receiver.recv().await {
            debug!(analysis_id = %job.analysis_id, "Job received");
            let orchestrator = self.orchestrator.clone();
            tokio::spawn(async move {
                orchestrator.run(job.analysis_id).await;
            });
        }
        info!("Analysis queue closed, worker stopping");
    }
}
