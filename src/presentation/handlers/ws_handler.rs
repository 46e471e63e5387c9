// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Extension,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};

use crate::infrastructure::realtime::progress_broadcaster::{ChannelObserver, ProgressBroadcaster};

/// WebSocket 连接共享的推送状态
#[derive(Clone)]
pub struct RealtimeState {
    pub broadcaster: Arc<ProgressBroadcaster>,
    /// 每个连接允许积压的消息数
    pub observer_buffer: usize,
}

/// 升级为 WebSocket，连接期间接收所有分析的进度推送
pub async fn progress_socket(
    ws: WebSocketUpgrade,
    Extension(realtime): Extension<RealtimeState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| observe(socket, realtime))
}

async fn observe(socket: WebSocket, realtime: RealtimeState) {
    let (observer, mut outbound) = ChannelObserver::channel(realtime.observer_buffer);
    let observer_id = realtime.broadcaster.register(Arc::new(observer));
    info!(observer_id = %observer_id, "Progress observer connected");

    let (mut sink, mut stream) = socket.split();

    let mut send_task = tokio::spawn(async move {
        while let Some(message) = outbound.recv().await {
            if sink.send(Message::Text(message.into())).await.is_err() {
                break;
            }
        }
    });

    // Inbound frames are ignored; the loop only detects disconnects
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            if let Message::Close(_) = message {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    realtime.broadcaster.unregister(observer_id);
    debug!(observer_id = %observer_id, "Progress observer disconnected");
}
