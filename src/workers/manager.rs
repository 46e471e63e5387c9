// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::analysis_repository::AnalysisRepository;
use crate::queue::analysis_queue::AnalysisJob;
use crate::workers::analysis_worker::AnalysisWorker;
use tokio::signal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 工作管理器
#[derive(Default)]
pub struct WorkerManager {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 启动工作器
    ///
    /// # 参数
    ///
    /// * `worker` - 分析工作器
    /// * `receiver` - 队列消费端
    pub fn start_worker<R>(
        &mut self,
        worker: AnalysisWorker<R>,
        receiver: mpsc::UnboundedReceiver<AnalysisJob>,
    ) where
        R: AnalysisRepository + 'static,
    {
        let handle = tokio::spawn(async move {
            worker.run(receiver).await;
        });
        self.handles.push(handle);
    }

    /// 停止所有工作器的队列消费循环
    ///
    /// 只终止消费循环，之后不再接收新任务；已派生的分析任务不受影响，
    /// 会继续运行到终态。
    pub fn shutdown(&mut self) {
        info!("Shutting down workers...");
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        info!("Workers shut down successfully");
    }
}

/// 等待 Ctrl+C
pub async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => error!("Unable to listen for shutdown signal: {}", err),
    }
}
