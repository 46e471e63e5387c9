// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;
use uuid::Uuid;

/// 队列错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// 消费端已停止
    #[error("Analysis queue closed")]
    Closed,
}

/// 待编排的分析任务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisJob {
    pub analysis_id: Uuid,
}

/// 分析任务队列特质
#[async_trait]
pub trait AnalysisQueue: Send + Sync {
    /// 入队任务，不等待任务被处理
    async fn enqueue(&self, job: AnalysisJob) -> Result<(), QueueError>;
}

/// 基于无界通道的进程内队列
#[derive(Debug, Clone)]
pub struct ChannelAnalysisQueue {
    sender: mpsc::UnboundedSender<AnalysisJob>,
}

impl ChannelAnalysisQueue {
    /// 创建队列及其消费端
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AnalysisJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl AnalysisQueue for ChannelAnalysisQueue {
    async fn enqueue(&self, job: AnalysisJob) -> Result<(), QueueError> {
        self.sender.send(job).map_err(|_| QueueError::Closed)
    }
}
