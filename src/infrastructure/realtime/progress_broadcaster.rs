// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::analysis::ProgressUpdate;
use crate::domain::services::progress_notifier::ProgressNotifier;
use crate::infrastructure::metrics::OBSERVERS_CONNECTED;
use dashmap::DashMap;
use metrics::gauge;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, trace};
use uuid::Uuid;

/// 推送事件名
pub const PROGRESS_EVENT: &str = "analysis-progress";

/// 投递错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// 观察者已断开
    #[error("Observer disconnected")]
    Disconnected,
    /// 观察者积压已满，本条消息被丢弃
    #[error("Observer buffer full")]
    Lagging,
}

/// 进度观察者
///
/// `try_deliver` 必须是非阻塞的。
pub trait ProgressObserver: Send + Sync {
    /// 是否处于可接收状态
    fn is_ready(&self) -> bool;
    /// 尝试投递一条已序列化的消息
    fn try_deliver(&self, message: &str) -> Result<(), DeliveryError>;
}

/// 基于有界通道的观察者，接收端通常由一个 WebSocket 写任务持有
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::Sender<String>,
}

impl ChannelObserver {
    /// 创建观察者及其接收端
    ///
    /// # 参数
    ///
    /// * `buffer` - 允许积压的消息数，至少为 1
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        (Self { sender }, receiver)
    }
}

impl ProgressObserver for ChannelObserver {
    fn is_ready(&self) -> bool {
        !self.sender.is_closed()
    }

    fn try_deliver(&self, message: &str) -> Result<(), DeliveryError> {
        self.sender
            .try_send(message.to_string())
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => DeliveryError::Lagging,
                mpsc::error::TrySendError::Closed(_) => DeliveryError::Disconnected,
            })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressPayload<'a> {
    analysis_id: Uuid,
    #[serde(flatten)]
    update: &'a ProgressUpdate,
}

#[derive(Serialize)]
struct ProgressEnvelope<'a> {
    event: &'static str,
    data: ProgressPayload<'a>,
}

/// 序列化一条进度推送消息
pub fn encode_progress(analysis_id: Uuid, update: &ProgressUpdate) -> serde_json::Result<String> {
    serde_json::to_string(&ProgressEnvelope {
        event: PROGRESS_EVENT,
        data: ProgressPayload {
            analysis_id,
            update,
        },
    })
}

/// 进度广播器
///
/// 持有当前连接的观察者集合。投递是一次性的、不缓冲也不重放，
/// 单个观察者的失败不影响其他观察者。
#[derive(Default)]
pub struct ProgressBroadcaster {
    observers: DashMap<Uuid, Arc<dyn ProgressObserver>>,
}

impl ProgressBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册观察者，返回用于注销的句柄
    pub fn register(&self, observer: Arc<dyn ProgressObserver>) -> Uuid {
        let id = Uuid::new_v4();
        self.observers.insert(id, observer);
        gauge!(OBSERVERS_CONNECTED).set(self.observers.len() as f64);
        debug!(observer_id = %id, "Observer registered");
        id
    }

    /// 注销观察者，重复注销无副作用
    pub fn unregister(&self, observer_id: Uuid) {
        if self.observers.remove(&observer_id).is_some() {
            gauge!(OBSERVERS_CONNECTED).set(self.observers.len() as f64);
            debug!(observer_id = %observer_id, "Observer unregistered");
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// 向所有当前观察者推送一条消息，返回成功投递的数量
    pub fn broadcast(&self, message: &str) -> usize {
        // Snapshot so no map guard is held while delivering
        let observers: Vec<(Uuid, Arc<dyn ProgressObserver>)> = self
            .observers
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        let mut delivered = 0;
        for (id, observer) in observers {
            if !observer.is_ready() {
                trace!(observer_id = %id, "Observer not ready, skipped");
                continue;
            }
            match observer.try_deliver(message) {
                Ok(()) => delivered += 1,
                Err(e) => trace!(observer_id = %id, error = %e, "Delivery dropped"),
            }
        }
        delivered
    }
}

impl ProgressNotifier for ProgressBroadcaster {
    fn notify(&self, analysis_id: Uuid, update: &ProgressUpdate) {
        match encode_progress(analysis_id, update) {
            Ok(message) => {
                let delivered = self.broadcast(&message);
                debug!(
                    analysis_id = %analysis_id,
                    status = %update.status,
                    delivered,
                    "Progress broadcast"
                );
            }
            Err(e) => error!("Failed to encode progress event: {}", e),
        }
    }
}

#[cfg(test)]
#[path = "progress_broadcaster_test.rs"]
mod tests;
